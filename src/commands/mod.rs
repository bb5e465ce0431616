//! Command implementations for scour.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod run;
mod show;

use crate::cli::Command;
use crate::error::Result;
use crate::plan::CleanupPlan;
use std::path::Path;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Run(args) => run::cmd_run(args),
        Command::Show(args) => show::cmd_show(args),
    }
}

/// Load the plan from a file if given, otherwise use the built-in default.
///
/// Both paths validate: a hand-edited YAML plan and the built-in list get
/// the same checks before anything is removed.
pub(crate) fn load_plan(path: Option<&Path>) -> Result<CleanupPlan> {
    match path {
        Some(path) => CleanupPlan::load(path),
        None => {
            let plan = CleanupPlan::default();
            plan.validate()?;
            Ok(plan)
        }
    }
}
