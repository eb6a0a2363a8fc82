//! Exit code constants for the scryforge CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, bad config, readiness issues)
//! - 2: Unknown template identifier

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid config, or failed readiness checks.
pub const USER_ERROR: i32 = 1;

/// The requested template identifier is not in the fixed set.
pub const UNKNOWN_TEMPLATE: i32 = 2;
