//! Exit code constants for the scour CLI.
//!
//! - 0: Success (including a run with nothing left to remove)
//! - 1: User error (bad working directory, unreadable or invalid plan)
//! - 2: Operator declined the confirmation gate
//! - 3: One or more removals hard-failed (the run still completed)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: inaccessible working directory, bad arguments, or invalid plan.
pub const USER_ERROR: i32 = 1;

/// Operator declined the confirmation prompt; nothing was removed.
pub const DECLINED: i32 = 2;

/// At least one removal failed with a hard I/O error.
pub const REMOVAL_FAILURE: i32 = 3;
