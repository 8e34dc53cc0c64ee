//! Path normalization and destination resolution.

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Resolve a destination directory against the project root.
///
/// `~` is expanded first. Relative paths are anchored at `root`, never at
/// the current directory, so output lands in the same place no matter where
/// the tool is invoked from.
pub fn resolve_target(target: &Path, root: &Path) -> PathBuf {
    let expanded = shellexpand::tilde(target.to_str().unwrap_or_default()).into_owned();
    let target = PathBuf::from(expanded);
    let full = if target.is_absolute() {
        target
    } else {
        root.join(target)
    };
    normalize_path(&full)
}
