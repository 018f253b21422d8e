//! Storage infrastructure: filesystem primitives with no JSON knowledge.
//!
//! - `path` turns a possibly-relative path into an absolute one.
//! - `prepare` guarantees a file exists, seeding it with a default payload
//!   (and creating missing parent directories) the first time.

pub mod path;
pub mod prepare;

pub use path::resolve;
pub use prepare::ensure_exists;
