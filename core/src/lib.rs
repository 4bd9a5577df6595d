//! Definition pools, `$ref` scanning and closure resolution for JSON schema
//! trees.
//!
//! This crate holds the pieces of schema resolution that need no filesystem
//! walking:
//!
//! - [`DefinitionPool`]: named, reusable schema fragments loaded from a
//!   `{"definitions": {...}}` document.
//! - [`scan_references`]: collects the `#/definitions/<name>` targets of every
//!   `$ref` in a document.
//! - [`resolve`]: extracts exactly the requested names from a pool, failing
//!   on the first one that is missing. Definition bodies are copied
//!   verbatim; their own `$ref`s are not followed.
//!
//! # Example
//!
//! ```
//! use schemagen_core::*;
//! use serde_json::json;
//!
//! let pool = DefinitionPool::from_value(json!({
//!     "definitions": {
//!         "id": {"type": "integer", "minimum": 1},
//!         "name": {"type": "string"}
//!     }
//! }))
//! .unwrap();
//!
//! let schema = json!({
//!     "type": "object",
//!     "properties": {"id": {"$ref": "#/definitions/id"}}
//! });
//!
//! let refs = scan_references(schema.as_object().unwrap());
//! assert_eq!(refs, vec!["id".to_string()]);
//!
//! let closure = resolve(Some(&pool), &refs).unwrap();
//! assert_eq!(closure.len(), 1);
//! assert_eq!(closure["id"], json!({"type": "integer", "minimum": 1}));
//! ```

mod error;
mod pool;
mod resolve;
mod scan;

pub use error::{PoolError, ResolveError};
pub use pool::{DEFINITIONS_KEY, DefinitionPool};
pub use resolve::resolve;
pub use scan::{ReferenceSet, parse_local_ref, scan_references};
