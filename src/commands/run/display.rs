//! Progress and summary output for the run command.

use super::types::RunReport;
use std::path::Path;

/// Print the banner that opens a category's removals.
pub fn print_category_banner(name: &str) {
    println!("==> {}", name);
}

/// Print one removed entry, relative to the working directory.
pub fn print_removed(relative: &Path) {
    println!("  removed {}", relative.display());
}

/// Print the end-of-run summary.
///
/// The retained list is static plan data, printed regardless of what was
/// actually found or deleted.
pub fn print_run_summary(report: &RunReport, retained: &[String]) {
    println!();

    if !report.failures.is_empty() {
        println!("Failed to remove {} item(s):", report.failures.len());
        for (path, reason) in &report.failures {
            println!("  - {}: {}", path.display(), reason);
        }
        println!();
    }

    if !retained.is_empty() {
        println!("Retained files:");
        for entry in retained {
            println!("  - {}", entry);
        }
        println!();
    }

    println!("Cleanup complete: {} item(s) removed.", report.removed_count);
}
