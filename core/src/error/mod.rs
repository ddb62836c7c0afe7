mod error;

pub use error::{CliError, StoreError};
