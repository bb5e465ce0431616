//! CLI argument parsing for scour.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Scour: confirmation-gated cleanup executor for retiring legacy project files.
///
/// The deletion plan is data: an ordered list of categories, each holding
/// file, directory, or glob targets. Absent targets are silent no-ops, so
/// re-running against an already-clean tree is always safe.
#[derive(Parser, Debug)]
#[command(name = "scour")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for scour.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply the cleanup plan to a working directory.
    ///
    /// Prompts for confirmation, then removes each target in plan order.
    /// Individual removal failures are collected and reported at the end.
    Run(RunArgs),

    /// Print the cleanup plan without touching the filesystem.
    ///
    /// Shows categories, targets, kinds, and the retained-files list.
    Show(ShowArgs),
}

/// Arguments for the `run` command.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Working directory to clean. Defaults to the current directory.
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Load the cleanup plan from a YAML file instead of the built-in plan.
    #[arg(long)]
    pub plan: Option<PathBuf>,

    /// Skip the confirmation prompt.
    #[arg(long)]
    pub yes: bool,

    /// Append an NDJSON audit event for this run to the given file.
    #[arg(long)]
    pub audit_log: Option<PathBuf>,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Load the cleanup plan from a YAML file instead of the built-in plan.
    #[arg(long)]
    pub plan: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
