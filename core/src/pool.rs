//! Named definition pools.
//!
//! A pool is built from a single definitions document shaped like
//! `{"definitions": {"<name>": <schema>, ...}}`. It is either fully loaded or
//! absent; there is no partially loaded state.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::PoolError;

/// Reserved top-level key holding named definitions.
///
/// Used both as the required field of a definitions document and as the key
/// under which resolved closures are injected into schema documents.
pub const DEFINITIONS_KEY: &str = "definitions";

/// In-memory collection of named schema definitions.
///
/// # Examples
///
/// ```
/// use schemagen_core::DefinitionPool;
/// use serde_json::json;
///
/// let pool = DefinitionPool::from_value(json!({
///     "definitions": {"id": {"type": "integer"}}
/// }))
/// .unwrap();
/// assert!(pool.contains("id"));
/// assert_eq!(pool.len(), 1);
///
/// // Anything other than a `definitions` object is rejected.
/// assert!(DefinitionPool::from_value(json!({"id": 32})).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefinitionPool {
    definitions: Map<String, Value>,
    source: Option<PathBuf>,
}

impl DefinitionPool {
    /// Loads a pool from a definitions file.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::NotFound`] if the file does not exist,
    /// [`PoolError::Io`] if it cannot be read, [`PoolError::Parse`] if it is
    /// not valid JSON, or [`PoolError::MissingDefinitionsKey`] if the
    /// top-level `definitions` field is missing or not an object.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PoolError> {
        let path = path.as_ref();
        let raw = std::fs::read(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                PoolError::NotFound(path.to_path_buf())
            } else {
                PoolError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        let value: Value = serde_json::from_slice(&raw).map_err(|source| PoolError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let definitions = take_definitions(value)
            .ok_or_else(|| PoolError::MissingDefinitionsKey(path.display().to_string()))?;

        Ok(Self {
            definitions,
            source: Some(path.to_path_buf()),
        })
    }

    /// Builds a pool from an already parsed definitions document.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::MissingDefinitionsKey`] if `value` is not an
    /// object with a `definitions` object field.
    pub fn from_value(value: Value) -> Result<Self, PoolError> {
        let definitions = take_definitions(value)
            .ok_or_else(|| PoolError::MissingDefinitionsKey(DEFINITIONS_KEY.to_string()))?;
        Ok(Self {
            definitions,
            source: None,
        })
    }

    /// Looks up a definition body by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.definitions.get(name)
    }

    /// Returns `true` if the pool defines `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// Returns the number of definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns `true` if the pool defines nothing.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Returns an iterator over definition names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }

    /// Returns the file this pool was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

fn take_definitions(value: Value) -> Option<Map<String, Value>> {
    match value {
        Value::Object(mut root) => match root.remove(DEFINITIONS_KEY) {
            Some(Value::Object(definitions)) => Some(definitions),
            _ => None,
        },
        _ => None,
    }
}
