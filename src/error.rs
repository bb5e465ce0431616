//! Error types for the scour CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for scour operations.
///
/// Each variant maps to a specific exit code. Declining the confirmation
/// gate is modelled as an error variant so it flows through the same exit
/// path as real failures, but it is expected control flow, not a defect.
#[derive(Error, Debug)]
pub enum ScourError {
    /// User provided invalid arguments or the working directory is unusable.
    #[error("{0}")]
    UserError(String),

    /// The cleanup plan could not be loaded or failed validation.
    #[error("invalid cleanup plan: {0}")]
    PlanError(String),

    /// The operator declined the confirmation gate.
    #[error("cleanup declined; no files were removed")]
    Declined,

    /// One or more targets could not be removed.
    #[error("{0} target(s) could not be removed")]
    RemovalFailure(usize),
}

impl ScourError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScourError::UserError(_) => exit_codes::USER_ERROR,
            ScourError::PlanError(_) => exit_codes::USER_ERROR,
            ScourError::Declined => exit_codes::DECLINED,
            ScourError::RemovalFailure(_) => exit_codes::REMOVAL_FAILURE,
        }
    }
}

/// Result type alias for scour operations.
pub type Result<T> = std::result::Result<T, ScourError>;
