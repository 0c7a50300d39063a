//! Deep merge of mapping documents.
//!
//! Mappings merge key by key and recursively. Every other value, sequences
//! included, is replaced wholesale by the incoming side. Keys present only in
//! the destination are left untouched.
//!
//! ```
//! use kratix_sdk::document::{codec, merge};
//!
//! let existing = codec::from_yaml_str("a: {x: 1}\nlist: [1, 2]")?;
//! let incoming = codec::from_yaml_str("a: {y: 2}\nlist: [3]")?;
//! let merged = merge(
//!     existing.into_mapping().unwrap_or_default(),
//!     incoming.into_mapping().unwrap_or_default(),
//! );
//!
//! assert_eq!(
//!     kratix_sdk::document::Value::Mapping(merged),
//!     codec::from_yaml_str("a: {x: 1, y: 2}\nlist: [3]")?,
//! );
//! # Ok::<(), kratix_sdk::Error>(())
//! ```

use tracing::trace;

use super::{Map, Value};

/// Merges `src` into `dst` and returns the result.
pub fn merge(mut dst: Map, src: Map) -> Map {
    merge_into(&mut dst, src);
    dst
}

/// Merges `src` into `dst` in place.
pub fn merge_into(dst: &mut Map, src: Map) {
    for (key, incoming) in src {
        match incoming {
            Value::Mapping(incoming) => match dst.get_mut(&key) {
                Some(Value::Mapping(existing)) => merge_into(existing, incoming),
                _ => {
                    trace!(key = %key, "merge replaced value with mapping");
                    dst.insert(key, Value::Mapping(incoming));
                }
            },
            other => {
                trace!(key = %key, kind = other.type_name(), "merge replaced value");
                dst.insert(key, other);
            }
        }
    }
}

impl Value {
    /// Merges `other` into this node.
    ///
    /// Two mappings are merged with [`merge_into`]; any other combination
    /// replaces this node with `other`.
    pub fn merge(&mut self, other: Value) {
        match (self, other) {
            (Value::Mapping(existing), Value::Mapping(incoming)) => merge_into(existing, incoming),
            (this, other) => *this = other,
        }
    }
}
