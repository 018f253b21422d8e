//! The structured file handle.
//!
//! A [`JsonFile`] binds one path and one default payload to one in-memory
//! [`Value`].  The lifecycle is explicit:
//!
//! ```text
//! open ──► ensure_exists ──► read + decode ──► value
//!                                               │  value_mut / set
//!                           reload ◄────────────┤
//!                             save ◄────────────┘
//! ```
//!
//! Mutations live only in memory until [`JsonFile::save`] is called.
//! [`JsonFile::reload`] throws them away and re-reads the file.
//!
//! # Concurrency
//!
//! There is no locking.  Two handles bound to the same path (in one process
//! or several) are last-writer-wins: a `save` from one silently overwrites a
//! `save` from the other.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::trace;

use crate::document::binding::{FileBinding, DEFAULT_PAYLOAD};
use crate::document::canonical::{to_canonical_string, to_canonical_vec};
use crate::error::{JsonFileError, Result};
use crate::storage::prepare::ensure_exists;

/// A JSON document loaded from, and saved to, a single file.
#[derive(Debug, Clone)]
pub struct JsonFile {
    binding: FileBinding,
    value: Value,
}

impl JsonFile {
    /// Opens `path`, seeding it with `{}` if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`JsonFileError::Io`] if the file (or its parent directories)
    /// cannot be created or read, and [`JsonFileError::Decode`] if the file
    /// holds malformed JSON.  A malformed file is left untouched.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::from_binding(FileBinding::with_empty_object(path))
    }

    /// Opens `path`, seeding it with `default` if it does not exist yet.
    ///
    /// `default` is written verbatim, so it must itself be valid JSON for
    /// the open to succeed on a fresh file.
    ///
    /// # Errors
    ///
    /// Same as [`JsonFile::open`].
    pub fn open_with_default(path: impl Into<PathBuf>, default: impl Into<String>) -> Result<Self> {
        Self::from_binding(FileBinding::new(path, default))
    }

    /// Starts a builder for `path`.
    pub fn builder(path: impl Into<PathBuf>) -> JsonFileBuilder {
        JsonFileBuilder {
            path: path.into(),
            default_payload: DEFAULT_PAYLOAD.to_string(),
        }
    }

    /// Opens the file described by `binding`.
    ///
    /// # Errors
    ///
    /// Same as [`JsonFile::open`].
    pub fn from_binding(binding: FileBinding) -> Result<Self> {
        let value = load(&binding)?;
        Ok(Self { binding, value })
    }

    /// Discards the in-memory value and re-reads it from disk.
    ///
    /// The file is recreated from the default payload first if it has been
    /// removed since the handle was opened.
    ///
    /// # Errors
    ///
    /// Returns [`JsonFileError::Io`] or [`JsonFileError::Decode`].  On error
    /// the in-memory value is left exactly as it was before the call.
    pub fn reload(&mut self) -> Result<()> {
        self.value = load(&self.binding)?;
        Ok(())
    }

    /// Overwrites the file with the canonical encoding of the in-memory value.
    ///
    /// The file is truncated and rewritten in place; a failure part-way can
    /// leave it truncated or partially written.
    ///
    /// # Errors
    ///
    /// Returns [`JsonFileError::Io`] if the file cannot be created or written.
    pub fn save(&self) -> Result<()> {
        let path = self.binding.path();
        ensure_exists(path, self.binding.default_payload())?;

        let bytes = to_canonical_vec(&self.value).map_err(|source| JsonFileError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, &bytes).map_err(|source| JsonFileError::io(path, source))?;
        trace!(path = %path.display(), bytes = bytes.len(), "saved JSON file");
        Ok(())
    }

    /// The canonical text [`JsonFile::save`] would write right now.
    ///
    /// # Errors
    ///
    /// Returns [`JsonFileError::Encode`] if the value cannot be rendered.
    pub fn to_canonical_string(&self) -> Result<String> {
        to_canonical_string(&self.value).map_err(|source| JsonFileError::Encode {
            path: self.binding.path().to_path_buf(),
            source,
        })
    }

    // ── Value access ──────────────────────────────────────────────────────────

    /// The in-memory value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Mutable access to the in-memory value.  Call [`JsonFile::save`] to
    /// persist changes.
    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }

    /// Replaces the in-memory value, returning the previous one.
    pub fn set(&mut self, value: Value) -> Value {
        std::mem::replace(&mut self.value, value)
    }

    /// Consumes the handle, returning the in-memory value.
    pub fn into_value(self) -> Value {
        self.value
    }

    /// Decodes the in-memory value into `T`.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if the value does not match `T`.
    pub fn get_as<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        T::deserialize(&self.value)
    }

    /// Replaces the in-memory value with the JSON form of `data`.
    ///
    /// On error the in-memory value is unchanged.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if `data` cannot be represented as JSON
    /// (for example, a map with non-string keys).
    pub fn set_from<T: Serialize + ?Sized>(&mut self, data: &T) -> serde_json::Result<()> {
        self.value = serde_json::to_value(data)?;
        Ok(())
    }

    // ── Binding access ────────────────────────────────────────────────────────

    /// The path and default payload this handle was opened with.
    pub fn binding(&self) -> &FileBinding {
        &self.binding
    }

    /// The bound path, as given.
    pub fn path(&self) -> &Path {
        self.binding.path()
    }

    /// The default payload used when the file is missing.
    pub fn default_payload(&self) -> &str {
        self.binding.default_payload()
    }

    /// The bound path in absolute form.
    ///
    /// # Errors
    ///
    /// See [`crate::resolve`].
    pub fn absolute_path(&self) -> Result<PathBuf> {
        self.binding.absolute_path()
    }
}

/// Builder for [`JsonFile`] when the default payload is not `{}`.
///
/// ```rust,no_run
/// use easyjson::JsonFile;
///
/// let file = JsonFile::builder("history.json")
///     .default_payload("[]")
///     .open()
///     .unwrap();
/// assert!(file.value().is_array());
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileBuilder {
    path: PathBuf,
    default_payload: String,
}

impl JsonFileBuilder {
    /// Sets the text written when the file does not exist.
    pub fn default_payload(mut self, payload: impl Into<String>) -> Self {
        self.default_payload = payload.into();
        self
    }

    /// Seeds the file with the canonical encoding of `value`.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if `value` cannot be encoded.
    pub fn default_value(mut self, value: &Value) -> serde_json::Result<Self> {
        self.default_payload = to_canonical_string(value)?;
        Ok(self)
    }

    /// The binding this builder would open.
    pub fn binding(&self) -> FileBinding {
        FileBinding::new(self.path.clone(), self.default_payload.clone())
    }

    /// Opens the file.
    ///
    /// # Errors
    ///
    /// Same as [`JsonFile::open`].
    pub fn open(self) -> Result<JsonFile> {
        JsonFile::from_binding(FileBinding::new(self.path, self.default_payload))
    }
}

/// Ensures the bound file exists, then reads and decodes all of it.
fn load(binding: &FileBinding) -> Result<Value> {
    let path = binding.path();
    ensure_exists(path, binding.default_payload())?;

    let bytes = fs::read(path).map_err(|source| JsonFileError::io(path, source))?;
    let value = serde_json::from_slice(&bytes).map_err(|source| JsonFileError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    trace!(path = %path.display(), bytes = bytes.len(), "loaded JSON file");
    Ok(value)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
