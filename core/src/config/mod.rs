mod load;
mod types;

pub use load::{get_tracelab_data_dir, load_default};
pub use types::{AppConfig, HttpServerConfig, LoggingConfig};
