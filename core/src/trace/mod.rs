mod validate;

pub use validate::{validate_trace_jsonl, TraceReport};
