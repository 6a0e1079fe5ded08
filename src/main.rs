use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use disasm86::action::run::execute_run;
use disasm86::command::Cli;
use disasm86::error::DisasmError;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match execute_run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(DisasmError::EndOfStream) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "run failed");
            ExitCode::FAILURE
        }
    }
}
