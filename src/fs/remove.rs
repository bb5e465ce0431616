//! Removal primitives that tolerate absent targets.

use std::fs;
use std::io;
use std::path::Path;

/// What happened when a removal was attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// The entry existed and was removed.
    Removed,
    /// The entry was not present; nothing was done.
    Absent,
}

/// Remove a filesystem entry if it exists.
///
/// Directories are removed recursively with all their contents. Files and
/// symlinks are unlinked (a symlink to a directory is unlinked, never
/// followed). A missing entry is a successful no-op.
pub fn remove_entry_if_present(path: &Path) -> io::Result<RemovalOutcome> {
    // symlink_metadata so a dangling or directory-pointing symlink is
    // classified by the link itself, not its target.
    let metadata = match fs::symlink_metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(RemovalOutcome::Absent),
        Err(e) => return Err(e),
    };

    if metadata.is_dir() {
        fs::remove_dir_all(path)?;
    } else {
        fs::remove_file(path)?;
    }

    Ok(RemovalOutcome::Removed)
}
