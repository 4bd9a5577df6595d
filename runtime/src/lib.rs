//! Runtime loading of JSON schemas embedded by `schemagen`.
//!
//! Generated `bind.rs` loaders depend on this crate: they hand their
//! compiled-in table of compressed payloads to
//! [`SchemaRegistry::from_embedded`] and publish the result in a lazily
//! initialised static. The generator uses [`codec::compress`] to produce the
//! same payloads, so both sides of the format live here.
//!
//! # Quick start
//!
//! ```no_run
//! use schemagen_runtime::SchemaRegistry;
//!
//! // Normally emitted into `schema.rs` by the generator.
//! static EMBEDDED: &[(&str, &[u8])] = &[];
//!
//! let registry = SchemaRegistry::from_embedded(EMBEDDED).unwrap();
//! if let Some(schema) = registry.get("create_user") {
//!     println!("create_user has {} definitions", schema["definitions"].as_object().map_or(0, |d| d.len()));
//! }
//! ```

pub mod codec;
mod error;
mod registry;

pub use error::{Result, RuntimeError};
pub use registry::{EmbeddedTable, SchemaRegistry};
