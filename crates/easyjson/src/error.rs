//! Error type shared by every fallible operation in the crate.
//!
//! Failures fall into two families:
//!
//! - **I/O** – directory creation, file creation, opening, reading, or
//!   writing was refused by the filesystem.
//! - **Decode** – the file exists and was read, but its bytes are not a
//!   valid JSON document.
//!
//! Both carry the path that was being accessed so the caller can diagnose
//! the failure without extra context.  Nothing in this crate logs, retries,
//! or swallows an error; it is returned as-is.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = JsonFileError> = std::result::Result<T, E>;

/// Error type for JSON file operations.
#[derive(Debug, Error)]
pub enum JsonFileError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content could not be parsed as JSON.
    #[error("failed to decode JSON in {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory value could not be rendered as JSON text.
    #[error("failed to encode JSON for {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl JsonFileError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` for filesystem failures.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Returns `true` when the file held malformed JSON.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// The path that was being accessed when the error occurred.
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Decode { path, .. } | Self::Encode { path, .. } => path,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
