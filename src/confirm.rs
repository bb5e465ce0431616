//! The confirmation gate for destructive operations.
//!
//! The yes/no prompt is abstracted behind [`ConfirmationSource`] so the
//! production binary can block on a terminal prompt while tests supply a
//! preset answer without any real I/O.

use crate::error::{Result, ScourError};
use std::io::{BufRead, Write};

/// A source of yes/no answers for the confirmation gate.
pub trait ConfirmationSource {
    /// Ask the operator to confirm. Returns `Ok(true)` only on an
    /// affirmative answer; any other answer (including empty input)
    /// declines.
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Interactive confirmation reading one line from stdin.
///
/// The prompt goes to stderr so stdout stays a clean progress stream.
pub struct StdinConfirmation;

impl ConfirmationSource for StdinConfirmation {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let mut stderr = std::io::stderr();
        write!(stderr, "{} [y/N] ", prompt)
            .and_then(|()| stderr.flush())
            .map_err(|e| ScourError::UserError(format!("failed to write prompt: {}", e)))?;

        let mut input = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut input)
            .map_err(|e| ScourError::UserError(format!("failed to read confirmation: {}", e)))?;

        Ok(is_affirmative(&input))
    }
}

/// Fixed confirmation answer, used for `--yes` and in tests.
pub struct PresetConfirmation(pub bool);

impl ConfirmationSource for PresetConfirmation {
    fn confirm(&mut self, _prompt: &str) -> Result<bool> {
        Ok(self.0)
    }
}

/// Whether a raw input line counts as an affirmative answer.
///
/// Only `y` or `yes` (case-insensitive, surrounding whitespace ignored)
/// confirm. The empty default declines.
pub fn is_affirmative(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}
