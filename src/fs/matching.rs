//! Glob expansion against a working directory.

use crate::error::{Result, ScourError};
use globset::{GlobBuilder, GlobMatcher};
use std::fs;
use std::path::{Path, PathBuf};

/// Expand a glob pattern against `root`, returning the matching entries as
/// paths relative to `root`, sorted for deterministic output.
///
/// Patterns use shell semantics: `*` does not cross `/`, so `test_*.py`
/// matches only at the top level while `config/*.json` matches inside
/// `config/`. Matches may be files or directories; a matched directory is
/// reported once and not descended into. Zero matches is not an error.
pub fn expand_glob(root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let matcher = build_matcher(pattern)?;

    let mut matches = Vec::new();
    walk(root, Path::new(""), &matcher, &mut matches)?;
    matches.sort();
    Ok(matches)
}

/// Compile a single glob pattern with literal path separators.
pub fn build_matcher(pattern: &str) -> Result<GlobMatcher> {
    let glob = GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|e| ScourError::PlanError(format!("bad glob pattern '{}': {}", pattern, e)))?;
    Ok(glob.compile_matcher())
}

fn walk(
    root: &Path,
    relative_dir: &Path,
    matcher: &GlobMatcher,
    matches: &mut Vec<PathBuf>,
) -> Result<()> {
    let dir = root.join(relative_dir);
    let entries = fs::read_dir(&dir).map_err(|e| {
        ScourError::UserError(format!("failed to read directory '{}': {}", dir.display(), e))
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| {
            ScourError::UserError(format!("failed to read directory '{}': {}", dir.display(), e))
        })?;

        let relative = relative_dir.join(entry.file_name());
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);

        if matcher.is_match(&relative) {
            // A matched directory is removed whole; its contents are not
            // separate matches.
            matches.push(relative);
        } else if is_dir {
            walk(root, &relative, matcher, matches)?;
        }
    }

    Ok(())
}
