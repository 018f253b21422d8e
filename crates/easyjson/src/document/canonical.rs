//! Canonical JSON encoding.
//!
//! Every save goes through here so the on-disk form depends only on the
//! value, never on how it was built:
//!
//! ```text
//! {
//!     "a": [
//!         1,
//!         2
//!     ],
//!     "b": null
//! }
//! ```
//!
//! - Object keys are sorted ascending by code point, at every depth.
//! - Nested structures are indented by four spaces.
//! - Items are separated by `,` + newline, keys from values by `": "`.
//! - Empty objects and arrays render as `{}` and `[]`.
//! - No trailing newline.
//! - Non-ASCII text is written as raw UTF-8.  Writers that escape everything
//!   to `\uXXXX` produce different bytes for the same value.
//! - Numbers are written with the digits they were read with, so integers
//!   beyond 64 bits survive a load/save cycle unchanged.
//!
//! Sorting happens while serializing, so keys come out ordered even if
//! `serde_json` is built with `preserve_order`.

use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use serde_json::ser::{PrettyFormatter, Serializer as JsonSerializer};
use serde_json::Value;

/// Indentation used for each nesting level.
pub const INDENT: &[u8] = b"    ";

/// Renders `value` in canonical form as UTF-8 bytes.
///
/// # Errors
///
/// Returns a `serde_json::Error` if serialization fails, which does not
/// happen for well-formed `Value`s.
pub fn to_canonical_vec(value: &Value) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(128);
    let mut ser = JsonSerializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    Sorted(value).serialize(&mut ser)?;
    Ok(buf)
}

/// Renders `value` in canonical form as a `String`.
///
/// # Errors
///
/// See [`to_canonical_vec`].
pub fn to_canonical_string(value: &Value) -> serde_json::Result<String> {
    let bytes = to_canonical_vec(value)?;
    String::from_utf8(bytes).map_err(serde_json::Error::custom)
}

/// Serializes the wrapped value with object keys in sorted order.
struct Sorted<'a>(&'a Value);

impl Serialize for Sorted<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Value::Array(items) => serializer.collect_seq(items.iter().map(Sorted)),
            Value::Object(map) => {
                let mut entries: Vec<(&String, &Value)> = map.iter().collect();
                entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
                serializer.collect_map(entries.into_iter().map(|(k, v)| (k, Sorted(v))))
            }
            scalar => scalar.serialize(serializer),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
