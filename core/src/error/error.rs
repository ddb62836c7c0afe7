use thiserror::Error;

/// Errors raised by [`crate::run::RunStore`] lookups.
///
/// Structural trace problems are never errors; the validator reports
/// them as diagnostics (see [`crate::trace::TraceReport`]).
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("run not found: {0}")]
    NotFound(String),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("command failed: {0}")]
    Command(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}
