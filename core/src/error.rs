//! Error types for definition loading and closure resolution.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a [`DefinitionPool`](crate::DefinitionPool).
///
/// [`NotFound`](PoolError::NotFound) is the only recoverable variant: callers
/// continue without a pool and only fail later if a schema actually needs a
/// definition. Every other variant aborts the run.
#[derive(Debug, Error)]
pub enum PoolError {
    /// The definitions file does not exist.
    #[error("definitions file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The definitions file exists but could not be read.
    #[error("cannot read definitions file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The definitions file is not valid JSON.
    #[error("invalid JSON in definitions file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document parsed but has no `definitions` object at the top level.
    #[error("invalid {0} file format (missing definitions)")]
    MissingDefinitionsKey(String),
}

impl PoolError {
    /// Returns `true` when the definitions file is simply absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PoolError::NotFound(_))
    }
}

/// Errors produced when extracting a closure from a pool.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// References were requested but no pool exists here, or it is empty.
    #[error("missing definitions")]
    PoolUnusable,

    /// A requested name is not defined in the pool.
    #[error("missing definition {0}")]
    UnknownName(String),
}
