//! Error types for the scryforge CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//!
//! Note that a failed external generation call is deliberately NOT an error
//! here: the orchestrator treats it as a fallback signal (see
//! [`crate::llm::Unavailable`]) and the user never sees it as a failure.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for scryforge operations.
///
/// Each variant maps to a specific exit code. The only request-fatal
/// condition a user can trigger is picking a template outside the fixed set.
#[derive(Error, Debug)]
pub enum ForgeError {
    /// The requested template identifier is not in the fixed enumeration.
    #[error("unknown template '{0}'\n\nRun `scryforge templates` to list the available templates.")]
    UnknownTemplate(String),

    /// User provided invalid arguments or the configuration is invalid.
    #[error("{0}")]
    UserError(String),
}

impl ForgeError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ForgeError::UnknownTemplate(_) => exit_codes::UNKNOWN_TEMPLATE,
            ForgeError::UserError(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for scryforge operations.
pub type Result<T> = std::result::Result<T, ForgeError>;
