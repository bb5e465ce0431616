//! Plan struct definitions and the built-in default.

use super::types::{TargetKind, default_categories, default_retained};
use serde::{Deserialize, Serialize};

/// The complete, ordered set of removals for one run.
///
/// This struct represents the contents of a plan YAML file. Unknown fields
/// are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanupPlan {
    /// Categories in execution order.
    pub categories: Vec<Category>,

    /// Files intentionally kept, listed in the final summary regardless of
    /// what was actually found or deleted.
    pub retained: Vec<String>,
}

/// A named group of targets, used for progress banners.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Display name (e.g. "Duplicate configuration files").
    pub name: String,

    /// Targets in declared order.
    #[serde(default)]
    pub targets: Vec<CleanupTarget>,
}

/// One path or glob entry slated for removal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanupTarget {
    /// Path or glob pattern, relative to the working directory.
    pub pattern: String,

    /// How the pattern is interpreted at removal time.
    #[serde(default)]
    pub kind: TargetKind,
}

impl Default for CleanupPlan {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            retained: default_retained(),
        }
    }
}

impl CleanupPlan {
    /// An empty plan with no targets and no retained list.
    pub fn empty() -> Self {
        Self {
            categories: Vec::new(),
            retained: Vec::new(),
        }
    }

    /// Total number of targets across all categories.
    pub fn target_count(&self) -> usize {
        self.categories.iter().map(|c| c.targets.len()).sum()
    }
}
