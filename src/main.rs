//! Scryforge: an interactive demo that fills Scrypto blueprint templates,
//! scores the generated code against a fixed checklist, and walks through a
//! mocked build/test pipeline.
//!
//! This is the main entry point for the `scryforge` CLI. It parses arguments,
//! dispatches to the appropriate command handler, and handles errors with
//! proper exit codes.

mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod llm;
pub mod mock;
pub mod score;
pub mod session;
pub mod template;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse_args();

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
