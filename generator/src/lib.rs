//! Build-time generation of embedded JSON schema sources.
//!
//! A schema tree is a directory of `*.json` JSON Schema documents with an
//! optional `definitions.json` at its root. Every `#/definitions/<name>`
//! reference a document makes is resolved against that pool and the matching
//! definitions are injected into the document, making it self-contained.
//! Resolved documents are grouped into services and written out as Rust
//! sources: a gzip payload table plus a loader exposing a lazily decoded
//! [`SchemaRegistry`](schemagen_runtime::SchemaRegistry).
//!
//! # Main entry points
//!
//! - [`Generator::generate`] generates one tree into one output directory.
//! - [`Generator::generate_tree`] also generates nested definition scopes.
//! - [`Generator::generate_glob`] generates every tree on the search path.
//!
//! # Example
//!
//! ```
//! use schemagen::{GenerateConfig, Generator, Policy};
//!
//! let input = tempfile::tempdir().unwrap();
//! std::fs::write(
//!     input.path().join("definitions.json"),
//!     r#"{"definitions": {"id": {"type": "integer"}}}"#,
//! )
//! .unwrap();
//! std::fs::create_dir(input.path().join("users")).unwrap();
//! std::fs::write(
//!     input.path().join("users").join("get.json"),
//!     r##"{"properties": {"id": {"$ref": "#/definitions/id"}}}"##,
//! )
//! .unwrap();
//!
//! let out = tempfile::tempdir().unwrap();
//! let config = GenerateConfig {
//!     policy: Policy::Separate,
//!     ..GenerateConfig::default()
//! };
//! let summary = Generator::new(config)
//!     .generate(input.path(), out.path().join("api"))
//!     .unwrap();
//! assert_eq!(summary.services, vec!["users"]);
//! assert!(out.path().join("api").join("users").join("bind.rs").is_file());
//! ```

pub mod config;
pub mod emit;
mod error;
pub mod generate;
pub mod glob;
pub mod router;
pub mod store;
pub mod walker;

pub use config::{GenerateConfig, Policy};
pub use emit::{emit_service, render_artifact, render_loader};
pub use error::{GenerateError, Result};
pub use generate::{GenerateSummary, Generator, Unit, plan_units};
pub use glob::{discover_units, glob_units, search_roots};
pub use router::{PartitionRouter, key_for, service_dir};
pub use store::BlobStore;
pub use walker::{ScopeWalker, load_scope, resolve_document};
