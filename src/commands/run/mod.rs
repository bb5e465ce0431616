//! Implementation of the `scour run` command.
//!
//! Applies the cleanup plan to a working directory:
//! - resolves the working directory (fatal if inaccessible, before any prompt)
//! - asks the operator for one all-or-nothing confirmation
//! - removes each target in plan order, tolerating absent targets
//! - prints the retained-files summary and reports collected failures
//!
//! # Safety
//!
//! - Nothing is removed before the confirmation gate is affirmed
//! - Patterns are validated to be relative and traversal-free, and every
//!   removal re-checks before touching the filesystem
//! - A failed removal never aborts the remaining plan; failures are
//!   collected and surface as a non-zero exit at the end

mod display;
mod execution;
mod types;


use crate::audit::{AuditAction, AuditEvent, append_event};
use crate::cli::RunArgs;
use crate::confirm::{ConfirmationSource, PresetConfirmation, StdinConfirmation};
use crate::error::{Result, ScourError};
use serde_json::json;
use std::path::{Path, PathBuf};

use display::print_run_summary;
use execution::execute_plan;

/// Execute the `scour run` command.
pub fn cmd_run(args: RunArgs) -> Result<()> {
    if args.yes {
        run_with(&args, &mut PresetConfirmation(true))
    } else {
        run_with(&args, &mut StdinConfirmation)
    }
}

/// Run with an explicit confirmation source (injectable for tests).
pub(crate) fn run_with(args: &RunArgs, confirm: &mut dyn ConfirmationSource) -> Result<()> {
    // Fatal before any prompt: the working directory must be enterable.
    let root = resolve_working_dir(args.dir.as_deref())?;
    let plan = super::load_plan(args.plan.as_deref())?;

    let prompt = format!(
        "This will permanently delete up to {} target(s) under '{}'. Continue?",
        plan.target_count(),
        root.display()
    );

    if !confirm.confirm(&prompt)? {
        log_audit_event(args, AuditAction::Declined, &root, None);
        return Err(ScourError::Declined);
    }

    let report = execute_plan(&root, &plan);

    log_audit_event(args, AuditAction::Run, &root, Some(&report));
    print_run_summary(&report, &plan.retained);

    if !report.failures.is_empty() {
        return Err(ScourError::RemovalFailure(report.failures.len()));
    }

    Ok(())
}

/// Resolve and verify the working directory.
fn resolve_working_dir(dir: Option<&Path>) -> Result<PathBuf> {
    let requested = match dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().map_err(|e| {
            ScourError::UserError(format!("failed to get current working directory: {}", e))
        })?,
    };

    let root = requested.canonicalize().map_err(|e| {
        ScourError::UserError(format!(
            "working directory '{}' is not accessible: {}",
            requested.display(),
            e
        ))
    })?;

    if !root.is_dir() {
        return Err(ScourError::UserError(format!(
            "working directory '{}' is not a directory",
            root.display()
        )));
    }

    Ok(root)
}

/// Append an audit event if an audit log was requested.
///
/// Best-effort: a failure to write the log degrades to a warning and never
/// changes the outcome of the run.
fn log_audit_event(
    args: &RunArgs,
    action: AuditAction,
    root: &Path,
    report: Option<&types::RunReport>,
) {
    let Some(log_path) = &args.audit_log else {
        return;
    };

    let details = match report {
        Some(report) => json!({
            "working_dir": root.display().to_string(),
            "removed": report.removed_count,
            "failed": report.failures.len(),
        }),
        None => json!({
            "working_dir": root.display().to_string(),
        }),
    };

    let event = AuditEvent::new(action).with_details(details);
    if let Err(e) = append_event(log_path, &event) {
        eprintln!("Warning: failed to write audit log: {}", e);
    }
}
