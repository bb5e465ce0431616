use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Scaffold a scratch tree shaped like the legacy project the built-in plan
/// targets: one entry per plan category, plus the files the plan retains.
pub(crate) fn create_legacy_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    scaffold_legacy_tree(temp.path());
    temp
}

pub(crate) fn scaffold_legacy_tree(root: &Path) {
    // Original source tree
    write(root, "src/mcp_atlassian/jira/client.py", "class JiraClient: ...\n");
    write(root, "src/mcp_atlassian/__init__.py", "");

    // Redundant server variants
    write(root, "mcp_atlassian_fixed.py", "# fixed variant\n");
    write(root, "mcp_atlassian_updated.py", "# updated variant\n");
    write(root, "mcp_atlassian_v2.py", "# v2 variant\n");

    // Development test files (named + glob-caught strays)
    write(root, "test_mcp_protocol.py", "def test(): pass\n");
    write(root, "test_tools_count.py", "def test(): pass\n");
    write(root, "test_cookie_auth.py", "def test(): pass\n");
    write(root, "verify_complete_implementation.py", "print('ok')\n");
    write(root, "debug_connection.py", "print('debug')\n");
    write(root, "test_stray_experiment.py", "def test(): pass\n");
    write(root, "verify_extra_check.py", "print('ok')\n");

    // Duplicate configuration files (two locations)
    write(root, "claude_desktop_config.json", "{}\n");
    write(root, "claude_desktop_config_fixed.json", "{}\n");
    write(root, "config/claude_desktop_config.json", "{}\n");
    write(root, "config/server_settings.json", "{}\n");
    write(root, "old_config_backup.json", "{}\n");

    // Analysis/planning documents
    for doc in [
        "ANALYSIS.md",
        "CONSOLIDATION_PLAN.md",
        "IMPLEMENTATION_STATUS.md",
        "TOOLS_COMPARISON.md",
        "MIGRATION_NOTES.md",
        "CLEANUP_CHECKLIST.md",
        "NEXT_STEPS.md",
    ] {
        write(root, doc, "# notes\n");
    }

    // Consolidated extras
    write(root, "development/tests/test_old.py", "def test(): pass\n");
    write(root, "archive/snapshot.txt", "old\n");
    write(root, "mcp_atlassian_extended_backup.py", "# backup\n");

    // Miscellaneous: artifact of a mistyped pip install
    write(root, "=1.2.0", "");

    // Retained files the plan must never touch
    write(root, "consolidated/mcp_atlassian_extended.py", "# the server\n");
    write(root, "consolidated/core/cookie_reader.py", "# core\n");
    write(root, "README.md", "# Project\n");
}

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}
