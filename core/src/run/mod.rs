mod model;
mod simulate;
mod store;

pub use model::{EventType, Run, RunEvent};
pub use simulate::{simulate_run, DEFAULT_TASK_INPUT, SIM_TOOL_NAME};
pub use store::RunStore;
