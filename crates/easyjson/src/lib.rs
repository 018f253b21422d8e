//! # easyjson
//!
//! Binds an in-memory JSON document to a file on disk.
//!
//! A [`JsonFile`] owns one path, one default payload, and one in-memory
//! [`serde_json::Value`].  Opening a handle makes sure the file exists (writing
//! the default payload the first time) and loads it.  After that the caller
//! mutates the value freely and decides when to [`JsonFile::save`] it back or
//! [`JsonFile::reload`] it from disk.
//!
//! # Architecture overview (for beginners)
//!
//! - **`storage`** – Filesystem plumbing with no JSON knowledge.  The path
//!   resolver turns relative paths into absolute ones, and the file
//!   initializer creates a missing file (and its parent directories) with a
//!   default payload.
//!
//! - **`document`** – The JSON side.  The canonical encoder renders a value
//!   with sorted keys and four-space indentation so repeated saves are
//!   byte-identical, and the `JsonFile` handle ties it all together.
//!
//! - **`error`** – The single error type returned by every fallible call.
//!
//! # Example
//!
//! ```rust,no_run
//! use easyjson::JsonFile;
//! use serde_json::json;
//!
//! # fn main() -> easyjson::Result<()> {
//! let mut file = JsonFile::open("data/settings.json")?;
//! file.value_mut()["theme"] = json!("dark");
//! file.save()?;
//! # Ok(())
//! # }
//! ```

pub mod document;
pub mod error;
pub mod storage;

// Re-export the most-used items at the crate root so callers can write
// `easyjson::JsonFile` instead of `easyjson::document::json_file::JsonFile`.
pub use document::binding::{FileBinding, DEFAULT_PAYLOAD};
pub use document::canonical::{to_canonical_string, to_canonical_vec, INDENT};
pub use document::json_file::{JsonFile, JsonFileBuilder};
pub use error::{JsonFileError, Result};
pub use storage::path::resolve;
pub use storage::prepare::ensure_exists;
