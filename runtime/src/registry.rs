//! Schema registry decoded from generated payload tables.
//!
//! A generated `bind.rs` hands its `EMBEDDED` table to
//! [`SchemaRegistry::from_embedded`] on first access:
//!
//! ```no_run
//! use schemagen_runtime::SchemaRegistry;
//!
//! // Normally emitted into `schema.rs` by the generator.
//! static EMBEDDED: &[(&str, &[u8])] = &[];
//! let registry = SchemaRegistry::from_embedded(EMBEDDED).unwrap();
//! ```
//!
//! All lookups are O(1) via the internal `HashMap`.

use std::collections::HashMap;

use serde_json::Value;

use crate::codec;
use crate::error::{Result, RuntimeError};

/// Table of `(key, gzip payload)` pairs as emitted into generated sources.
pub type EmbeddedTable = &'static [(&'static str, &'static [u8])];

/// In-memory collection of resolved JSON schemas keyed by method name.
///
/// # Examples
///
/// ```
/// use schemagen_runtime::{SchemaRegistry, codec};
///
/// let payload = codec::compress(br#"{"type":"object","definitions":{}}"#).unwrap();
/// let table: &[(&str, &[u8])] = &[("create", &payload)];
///
/// let registry = SchemaRegistry::from_entries(table.iter().copied()).unwrap();
/// assert_eq!(registry.len(), 1);
/// assert_eq!(registry.get("create").unwrap()["type"], "object");
/// ```
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: HashMap<String, Value>,
}

impl SchemaRegistry {
    /// Decodes a compiled-in table.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::CompressionError`] if a payload is not valid
    /// gzip, or [`RuntimeError::JsonError`] if it does not hold JSON. Both
    /// name the offending key.
    pub fn from_embedded(table: EmbeddedTable) -> Result<Self> {
        Self::from_entries(table.iter().copied())
    }

    /// Decodes `(key, gzip payload)` pairs of any lifetime.
    ///
    /// # Errors
    ///
    /// Same as [`from_embedded`](Self::from_embedded).
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a [u8])>) -> Result<Self> {
        let mut schemas = HashMap::new();
        for (key, payload) in entries {
            let raw = codec::decompress(payload).map_err(|err| RuntimeError::CompressionError {
                key: key.to_string(),
                message: err.to_string(),
            })?;
            let schema = serde_json::from_slice(&raw).map_err(|source| RuntimeError::JsonError {
                key: key.to_string(),
                source,
            })?;
            schemas.insert(key.to_string(), schema);
        }
        Ok(Self { schemas })
    }

    /// Looks up a schema by key in O(1) time.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.schemas.get(key)
    }

    /// Returns `true` if the registry contains a schema for `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.schemas.contains_key(key)
    }

    /// Returns the number of schemas in the registry.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Returns `true` if the registry contains no schemas.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Returns an iterator over schema keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(|s| s.as_str())
    }
}
