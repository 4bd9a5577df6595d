//! Error types for embedded schema loading.
//!
//! Covers the two ways a compiled-in payload can fail to turn back into a
//! JSON value: decompression and parsing.

use thiserror::Error;

/// Errors that can occur while loading schemas at runtime.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// A payload is not valid JSON.
    #[error("JSON error in {key}: {source}")]
    JsonError {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Gzip compression or decompression failure.
    #[error("compression error in {key}: {message}")]
    CompressionError { key: String, message: String },
}

/// Convenience alias for results with [`RuntimeError`].
pub type Result<T> = std::result::Result<T, RuntimeError>;
