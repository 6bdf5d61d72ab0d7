//! Task Manager server binary.
//!
//! This binary is a thin wrapper that parses arguments and delegates to the library.

use std::process::ExitCode;

use clap::Parser;
use task_manager::cli::{run, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
