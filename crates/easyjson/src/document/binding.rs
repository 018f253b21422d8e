//! The immutable pair of file path and default payload behind a handle.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::storage::path::resolve;

/// Payload written to a file that does not exist yet: an empty JSON object.
pub const DEFAULT_PAYLOAD: &str = "{}";

/// A file path together with the text used to seed it on first use.
///
/// Fixed at construction and never changed afterwards.  The path is kept
/// exactly as given; relative paths are interpreted against the current
/// working directory at the time of each filesystem call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBinding {
    path: PathBuf,
    default_payload: String,
}

impl FileBinding {
    /// Binds `path` to the given default payload.
    pub fn new(path: impl Into<PathBuf>, default_payload: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            default_payload: default_payload.into(),
        }
    }

    /// Binds `path` to [`DEFAULT_PAYLOAD`].
    pub fn with_empty_object(path: impl Into<PathBuf>) -> Self {
        Self::new(path, DEFAULT_PAYLOAD)
    }

    /// The path as it was given.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The text written verbatim when the file is missing.
    pub fn default_payload(&self) -> &str {
        &self.default_payload
    }

    /// The bound path in absolute form.
    ///
    /// # Errors
    ///
    /// See [`resolve`].
    pub fn absolute_path(&self) -> Result<PathBuf> {
        resolve(&self.path)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
