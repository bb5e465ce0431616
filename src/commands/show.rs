//! Implementation of the `scour show` command.
//!
//! Prints the cleanup plan without touching the filesystem, so an operator
//! can review exactly what `run` would attempt to remove.

use crate::cli::ShowArgs;
use crate::error::Result;

/// Execute the `scour show` command.
pub fn cmd_show(args: ShowArgs) -> Result<()> {
    let plan = super::load_plan(args.plan.as_deref())?;

    for category in &plan.categories {
        println!("{} ({} target(s)):", category.name, category.targets.len());
        for target in &category.targets {
            println!("  - {} [{}]", target.pattern, target.kind);
        }
        println!();
    }

    if !plan.retained.is_empty() {
        println!("Retained files:");
        for entry in &plan.retained {
            println!("  - {}", entry);
        }
    }

    Ok(())
}
