//! Target kinds and the built-in default plan.

use super::model::{Category, CleanupTarget};
use serde::{Deserialize, Serialize};

/// Filesystem kind of a cleanup target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    /// A single named file (default, the common case).
    #[default]
    File,
    /// A directory removed recursively with all contents.
    Directory,
    /// A glob pattern expanded against the working directory at run time.
    Glob,
}

impl TargetKind {
    /// Parse a target kind from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "file" => Some(Self::File),
            "directory" => Some(Self::Directory),
            "glob" => Some(Self::Glob),
            _ => None,
        }
    }
}

impl std::fmt::Display for TargetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetKind::File => write!(f, "file"),
            TargetKind::Directory => write!(f, "directory"),
            TargetKind::Glob => write!(f, "glob"),
        }
    }
}

fn file(pattern: &str) -> CleanupTarget {
    CleanupTarget {
        pattern: pattern.to_string(),
        kind: TargetKind::File,
    }
}

fn directory(pattern: &str) -> CleanupTarget {
    CleanupTarget {
        pattern: pattern.to_string(),
        kind: TargetKind::Directory,
    }
}

fn glob(pattern: &str) -> CleanupTarget {
    CleanupTarget {
        pattern: pattern.to_string(),
        kind: TargetKind::Glob,
    }
}

/// The built-in deletion plan for the standard legacy project layout.
pub fn default_categories() -> Vec<Category> {
    vec![
        Category {
            name: "Original source tree".to_string(),
            targets: vec![directory("src")],
        },
        Category {
            name: "Redundant server variants".to_string(),
            targets: vec![
                file("mcp_atlassian_fixed.py"),
                file("mcp_atlassian_updated.py"),
                file("mcp_atlassian_v2.py"),
            ],
        },
        Category {
            name: "Development test files".to_string(),
            targets: vec![
                file("test_mcp_protocol.py"),
                file("test_tools_count.py"),
                file("test_cookie_auth.py"),
                file("verify_complete_implementation.py"),
                file("debug_connection.py"),
                glob("test_*.py"),
                glob("verify_*.py"),
            ],
        },
        Category {
            name: "Duplicate configuration files".to_string(),
            targets: vec![
                file("claude_desktop_config.json"),
                file("claude_desktop_config_fixed.json"),
                glob("config/*.json"),
                glob("*_config_backup.json"),
            ],
        },
        Category {
            name: "Analysis/planning documents".to_string(),
            targets: vec![
                file("ANALYSIS.md"),
                file("CONSOLIDATION_PLAN.md"),
                file("IMPLEMENTATION_STATUS.md"),
                file("TOOLS_COMPARISON.md"),
                file("MIGRATION_NOTES.md"),
                file("CLEANUP_CHECKLIST.md"),
                file("NEXT_STEPS.md"),
            ],
        },
        Category {
            name: "Consolidated extras".to_string(),
            targets: vec![
                directory("development"),
                directory("archive"),
                file("mcp_atlassian_extended_backup.py"),
            ],
        },
        Category {
            name: "Miscellaneous".to_string(),
            // Artifact of a mistyped `pip install package=1.2.0`.
            targets: vec![file("=1.2.0")],
        },
    ]
}

/// The static list of intentionally-kept files shown in the run summary.
pub fn default_retained() -> Vec<String> {
    vec![
        "consolidated/mcp_atlassian_extended.py".to_string(),
        "consolidated/core/".to_string(),
        "README.md".to_string(),
    ]
}
