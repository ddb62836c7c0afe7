use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tracelab", about = "Demo harness for agent tool-call traces")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct ServeArgs {
    #[arg(long)]
    pub host: Option<String>,

    #[arg(long)]
    pub port: Option<u16>,

    /// Reuse a session id instead of generating one (useful for supervisors).
    #[arg(long)]
    pub session_id: Option<String>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct RunArgs {
    /// Text for the simulated echo tool call.
    #[arg(long, group = "task_input")]
    pub input: Option<String>,

    /// Full task payload as a JSON object; overrides --input.
    #[arg(long, group = "task_input")]
    pub task: Option<String>,

    /// Config payload as a JSON object (opaque to the harness).
    #[arg(long)]
    pub config: Option<String>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ValidateArgs {
    /// Trace file (JSONL). Reads stdin when omitted.
    #[arg(long)]
    pub file: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP API server.
    Serve(ServeArgs),
    /// Simulate one run locally and print its events as JSONL.
    Run(RunArgs),
    /// Validate a JSONL trace for call/result pairing.
    Validate(ValidateArgs),
}
