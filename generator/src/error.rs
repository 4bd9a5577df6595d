//! Error types for a generation run.
//!
//! Authoring errors (bad definitions, reserved key misuse, unresolvable
//! references) and I/O errors all abort the unit of work they occur in. None
//! of them are retried.

use std::path::{Path, PathBuf};

use schemagen_core::{PoolError, ResolveError};
use thiserror::Error;

/// Errors that can occur while generating embedded schema sources.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Filesystem I/O failure on a specific path.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A schema file is not valid JSON.
    #[error("invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A schema file holds valid JSON that is not an object.
    #[error("{} must contain a JSON object", .0.display())]
    SchemaNotObject(PathBuf),

    /// A schema file already uses the reserved `definitions` key.
    #[error("{} must not have a \"definitions\" field", .0.display())]
    SchemaHasDefinitions(PathBuf),

    /// The definitions file is unusable.
    #[error(transparent)]
    Pool(#[from] PoolError),

    /// A schema references definitions that cannot be supplied.
    #[error("{}: {source}", path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: ResolveError,
    },

    /// A resolved schema could not be serialized back to JSON.
    #[error("cannot serialize {}: {source}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file parsing or serialization failure.
    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),

    /// Invalid or missing input (e.g. non-existent input directory).
    #[error("{0}")]
    InvalidInput(String),

    /// The worker pool could not be started.
    #[error("cannot create worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl GenerateError {
    /// Returns a closure wrapping an I/O error with the path it occurred on.
    pub(crate) fn io(path: &Path) -> impl FnOnce(std::io::Error) -> GenerateError + '_ {
        move |source| GenerateError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Convenience alias for results with [`GenerateError`].
pub type Result<T> = std::result::Result<T, GenerateError>;
