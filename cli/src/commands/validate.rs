use std::io::Read;

use tracelab_core::api::{validate_trace_jsonl, CliError};

use super::cli::ValidateArgs;

/// Handle the `validate` subcommand. Prints one diagnostic per line and
/// exits 1 when the trace fails; only IO problems are process errors.
pub fn handle_validate(args: ValidateArgs) -> Result<i32, CliError> {
    let text = match &args.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let report = validate_trace_jsonl(&text);
    if report.ok {
        println!("ok");
        return Ok(0);
    }

    for err in &report.errors {
        eprintln!("{err}");
    }
    Ok(1)
}
