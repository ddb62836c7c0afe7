use serde_json::{json, Value};
use tracelab_core::api::{CliError, RunStore};

use super::cli::RunArgs;

/// Handle the `run` subcommand: simulate a single run in-process and
/// write its events to stdout as JSONL (one event object per line).
pub fn handle_run(args: RunArgs) -> Result<i32, CliError> {
    let task = match (&args.task, &args.input) {
        (Some(raw), _) => parse_object("--task", raw)?,
        (None, Some(input)) => json!({ "input": input }),
        (None, None) => json!({}),
    };
    let config = match &args.config {
        Some(raw) => parse_object("--config", raw)?,
        None => json!({}),
    };

    let store = RunStore::new();
    let run = store.create_run(config, task);
    let events = store
        .simulate(&run.run_id)
        .map_err(|e| CliError::Command(e.to_string()))?;

    for ev in &events {
        let line =
            serde_json::to_string(ev).map_err(|e| CliError::Command(e.to_string()))?;
        println!("{line}");
    }

    tracing::info!(run_id = %run.run_id, events = events.len(), "run simulated");
    Ok(0)
}

fn parse_object(flag: &str, raw: &str) -> Result<Value, CliError> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| CliError::Config(format!("{flag} is not valid json: {e}")))?;
    if !value.is_object() {
        return Err(CliError::Config(format!("{flag} must be a json object")));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_object_accepts_objects_only() {
        assert!(parse_object("--task", "{\"input\":\"hi\"}").is_ok());
        assert!(parse_object("--task", "[1,2]").is_err());
        assert!(parse_object("--task", "not json").is_err());
    }

    #[test]
    fn handle_run_with_input_flag() {
        let args = RunArgs {
            input: Some("hi".into()),
            task: None,
            config: None,
        };
        assert_eq!(handle_run(args).unwrap(), 0);
    }
}
