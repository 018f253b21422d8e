//! File initializer: make sure a file exists before it is read.
//!
//! The only effects are directory creation and file creation, and both are
//! skipped entirely when something already exists at the target path.  An
//! existing file is never inspected, so a corrupt file stays corrupt; it is
//! the reader's job to report that.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{JsonFileError, Result};

/// Ensures a file exists at `path`, writing `default` to it if it did not.
///
/// When nothing exists at `path`, every missing directory in its parent chain
/// is created and then the file is written with `default` verbatim.  When any
/// filesystem entry already exists there, this is a no-op.
///
/// Returns `true` if the file was created by this call.
///
/// # Errors
///
/// Returns [`JsonFileError::Io`] if a parent directory or the file itself
/// cannot be created.  The error carries the path that failed.
pub fn ensure_exists(path: impl AsRef<Path>, default: &str) -> Result<bool> {
    let path = path.as_ref();
    if path.exists() {
        return Ok(false);
    }

    // A bare file name has an empty parent: nothing to create.
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|source| JsonFileError::io(dir, source))?;
            debug!(dir = %dir.display(), "created parent directories");
        }
    }

    fs::write(path, default).map_err(|source| JsonFileError::io(path, source))?;
    debug!(path = %path.display(), bytes = default.len(), "created file with default payload");
    Ok(true)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use uuid::Uuid;

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("easyjson_prepare_{}", Uuid::new_v4()))
    }

    #[test]
    fn test_ensure_exists_creates_parents_and_writes_default() {
        // Arrange
        let dir = scratch_dir();
        let path = dir.join("a").join("b").join("data.json");

        // Act
        let created = ensure_exists(&path, "[1, 2]").unwrap();

        // Assert
        assert!(created);
        assert_eq!(fs::read_to_string(&path).unwrap(), "[1, 2]");

        // Cleanup
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_ensure_exists_writes_default_verbatim() {
        // Arrange: the default is not even valid JSON; it is written as-is.
        let dir = scratch_dir();
        let path = dir.join("raw.txt");

        // Act
        ensure_exists(&path, "  not json\n").unwrap();

        // Assert
        assert_eq!(fs::read_to_string(&path).unwrap(), "  not json\n");
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_ensure_exists_leaves_existing_file_untouched() {
        // Arrange
        let dir = scratch_dir();
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("y.json");
        fs::write(&path, "not valid json").unwrap();

        // Act
        let created = ensure_exists(&path, "{}").unwrap();

        // Assert
        assert!(!created);
        assert_eq!(fs::read_to_string(&path).unwrap(), "not valid json");
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_ensure_exists_is_idempotent() {
        let dir = scratch_dir();
        let path = dir.join("data.json");

        assert!(ensure_exists(&path, "{}").unwrap());
        assert!(!ensure_exists(&path, "[]").unwrap());

        // The second default never reaches the disk.
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_ensure_exists_treats_directory_as_existing_entry() {
        let dir = scratch_dir();
        fs::create_dir_all(&dir).unwrap();

        let created = ensure_exists(&dir, "{}").unwrap();

        assert!(!created);
        assert!(dir.is_dir());
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_ensure_exists_reports_failing_directory() {
        // Arrange: a regular file sits where a parent directory must go.
        let dir = scratch_dir();
        fs::create_dir_all(&dir).unwrap();
        let blocker = dir.join("blocker");
        fs::write(&blocker, "").unwrap();
        let path = blocker.join("inner").join("data.json");

        // Act
        let err = ensure_exists(&path, "{}").unwrap_err();

        // Assert
        assert!(err.is_io());
        assert_eq!(err.path(), blocker.join("inner").as_path());
        fs::remove_dir_all(&dir).ok();
    }
}
