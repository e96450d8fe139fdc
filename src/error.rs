//! Error types for the `research-memory` crate.

use thiserror::Error;

/// Errors that can occur in memory subsystem operations.
#[derive(Debug, Error)]
pub enum MemoryError {
    /// A configuration validation error. Fatal at construction time.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The embedding backend is in degraded mode and cannot produce vectors.
    ///
    /// This is an explicit, non-fatal signal: ingest proceeds storing text
    /// without vectors and retrieval degrades to empty results. It is never
    /// substituted with a zero vector.
    #[error("Embedding backend unavailable (degraded mode)")]
    EmbeddingUnavailable,

    /// An error occurred during embedding generation.
    #[error("Embedding error ({provider}): {message}")]
    EmbeddingError {
        /// The embedding provider that produced the error.
        provider: String,
        /// A description of the failure.
        message: String,
    },

    /// A vector store write failed. Propagated to the ingest caller.
    #[error("Vector store write error ({backend}): {message}")]
    StoreWriteError {
        /// The vector store backend that produced the error.
        backend: String,
        /// A description of the failure.
        message: String,
    },

    /// A vector store read failed. Callers on the read path catch this and
    /// degrade to an empty result set.
    #[error("Vector store read error ({backend}): {message}")]
    StoreReadError {
        /// The vector store backend that produced the error.
        backend: String,
        /// A description of the failure.
        message: String,
    },
}

/// A convenience result type for memory operations.
pub type Result<T> = std::result::Result<T, MemoryError>;
