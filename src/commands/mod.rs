//! Command implementations for scryforge.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the shared rendering helpers the commands use to
//! print records and history.

mod doctor;
mod generate;
mod render;
mod session;
mod templates;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Each command
/// is routed to its handler function.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Generate(args) => generate::cmd_generate(args),
        Command::Session(args) => session::cmd_session(args),
        Command::Templates => templates::cmd_templates(),
        Command::Doctor => doctor::cmd_doctor(),
    }
}
