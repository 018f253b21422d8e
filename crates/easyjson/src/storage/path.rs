//! Path resolver: absolute form of a possibly-relative path.
//!
//! Resolution is purely lexical.  Relative paths are joined onto the current
//! working directory, `.` components are dropped, and `..` removes the
//! preceding component.  Nothing is looked up on disk, so the path does not
//! need to exist and symlinks are left untouched.

use std::path::{Component, Path, PathBuf};

use crate::error::{JsonFileError, Result};

/// Returns the absolute form of `path`.
///
/// # Errors
///
/// Returns [`JsonFileError::Io`] only when `path` is relative and the current
/// working directory cannot be determined (for example, it was deleted).
///
/// # Examples
///
/// ```rust
/// use easyjson::resolve;
///
/// let abs = resolve("data/../settings.json").unwrap();
/// assert!(abs.is_absolute());
/// assert!(abs.ends_with("settings.json"));
/// ```
pub fn resolve(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    if path.is_absolute() {
        return Ok(normalize(path));
    }
    let cwd = std::env::current_dir().map_err(|source| JsonFileError::io(".", source))?;
    Ok(normalize(&cwd.join(path)))
}

/// Collapses `.` and `..` components without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            // `..` at the root stays at the root.
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────
