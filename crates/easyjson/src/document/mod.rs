//! Document layer: the JSON side of the crate.
//!
//! - `binding` holds the immutable path + default payload pair.
//! - `canonical` renders a value in its deterministic on-disk form.
//! - `json_file` is the stateful handle tying a binding to a loaded value.

pub mod binding;
pub mod canonical;
pub mod json_file;

pub use binding::{FileBinding, DEFAULT_PAYLOAD};
pub use canonical::{to_canonical_string, to_canonical_vec};
pub use json_file::{JsonFile, JsonFileBuilder};
