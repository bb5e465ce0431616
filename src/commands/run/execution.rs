//! Plan execution logic.

use super::display::{print_category_banner, print_removed};
use super::types::RunReport;
use crate::fs::{RemovalOutcome, expand_glob, path_contains_traversal, remove_entry_if_present};
use crate::plan::{CleanupPlan, CleanupTarget, TargetKind};
use std::path::Path;

/// Execute the plan against the working directory.
///
/// Categories run in declared order; within a category, targets run in
/// declared order. An absent target is a silent no-op. A hard failure is
/// recorded and the remaining plan continues.
pub fn execute_plan(root: &Path, plan: &CleanupPlan) -> RunReport {
    let mut report = RunReport::default();

    for category in &plan.categories {
        print_category_banner(&category.name);
        for target in &category.targets {
            apply_target(root, target, &mut report);
        }
    }

    report
}

fn apply_target(root: &Path, target: &CleanupTarget, report: &mut RunReport) {
    match target.kind {
        TargetKind::File | TargetKind::Directory => {
            remove_relative(root, Path::new(&target.pattern), report);
        }
        TargetKind::Glob => match expand_glob(root, &target.pattern) {
            Ok(matches) => {
                for relative in matches {
                    remove_relative(root, &relative, report);
                }
            }
            Err(e) => {
                report
                    .failures
                    .push((Path::new(&target.pattern).to_path_buf(), e.to_string()));
            }
        },
    }
}

/// Remove one entry addressed relative to the working directory.
fn remove_relative(root: &Path, relative: &Path, report: &mut RunReport) {
    // Plan validation already rejected these; re-check before deleting.
    if relative.is_absolute() || path_contains_traversal(relative) {
        report.failures.push((
            relative.to_path_buf(),
            "refusing to remove path outside the working directory".to_string(),
        ));
        return;
    }

    match remove_entry_if_present(&root.join(relative)) {
        Ok(RemovalOutcome::Removed) => {
            print_removed(relative);
            report.removed_count += 1;
        }
        Ok(RemovalOutcome::Absent) => {}
        Err(e) => {
            report.failures.push((relative.to_path_buf(), e.to_string()));
        }
    }
}
