//! Stable re-exports for consumers (`cli` and external crates).
//!
//! Prefer importing from `tracelab_core::api` instead of reaching into internal modules.

pub use crate::config::{
    get_tracelab_data_dir, load_default, AppConfig, HttpServerConfig, LoggingConfig,
};
pub use crate::error::{CliError, StoreError};
pub use crate::run::{
    simulate_run, EventType, Run, RunEvent, RunStore, DEFAULT_TASK_INPUT, SIM_TOOL_NAME,
};
pub use crate::trace::{validate_trace_jsonl, TraceReport};
