//! Configuration for the memory subsystem.

use serde::{Deserialize, Serialize};

use crate::error::{MemoryError, Result};

/// Configuration parameters consumed by the memory core.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemoryConfig {
    /// Maximum chunk size in characters.
    pub chunk_size: usize,
    /// Number of overlapping characters between consecutive chunks.
    pub chunk_overlap: usize,
    /// Identifier of the embedding model in use.
    pub embedding_model: String,
    /// Upper bound on the assembled RAG context, in characters.
    pub rag_context_max_chars: usize,
    /// Number of research chunks to retrieve per query.
    pub top_k_chunks: usize,
    /// Number of past topic summaries to retrieve per query.
    pub top_k_topics: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            chunk_overlap: 100,
            embedding_model: "all-MiniLM-L6-v2".to_string(),
            rag_context_max_chars: 15_000,
            top_k_chunks: 5,
            top_k_topics: 3,
        }
    }
}

impl MemoryConfig {
    /// Create a new builder for constructing a [`MemoryConfig`].
    pub fn builder() -> MemoryConfigBuilder {
        MemoryConfigBuilder::default()
    }
}

/// Builder for constructing a validated [`MemoryConfig`].
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigBuilder {
    config: MemoryConfig,
}

impl MemoryConfigBuilder {
    /// Set the maximum chunk size in characters.
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.config.chunk_size = size;
        self
    }

    /// Set the overlap between consecutive chunks in characters.
    pub fn chunk_overlap(mut self, overlap: usize) -> Self {
        self.config.chunk_overlap = overlap;
        self
    }

    /// Set the embedding model identifier.
    pub fn embedding_model(mut self, model: impl Into<String>) -> Self {
        self.config.embedding_model = model.into();
        self
    }

    /// Set the maximum assembled context length in characters.
    pub fn rag_context_max_chars(mut self, max: usize) -> Self {
        self.config.rag_context_max_chars = max;
        self
    }

    /// Set the number of research chunks retrieved per query.
    pub fn top_k_chunks(mut self, k: usize) -> Self {
        self.config.top_k_chunks = k;
        self
    }

    /// Set the number of topic summaries retrieved per query.
    pub fn top_k_topics(mut self, k: usize) -> Self {
        self.config.top_k_topics = k;
        self
    }

    /// Build the [`MemoryConfig`], validating that parameters are consistent.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::ConfigError`] if:
    /// - `chunk_size == 0`
    /// - `chunk_overlap >= chunk_size` (the window step must stay ≥ 1)
    /// - `top_k_chunks == 0` or `top_k_topics == 0`
    pub fn build(self) -> Result<MemoryConfig> {
        if self.config.chunk_size == 0 {
            return Err(MemoryError::ConfigError("chunk_size must be greater than zero".to_string()));
        }
        if self.config.chunk_overlap >= self.config.chunk_size {
            return Err(MemoryError::ConfigError(format!(
                "chunk_overlap ({}) must be less than chunk_size ({})",
                self.config.chunk_overlap, self.config.chunk_size
            )));
        }
        if self.config.top_k_chunks == 0 {
            return Err(MemoryError::ConfigError(
                "top_k_chunks must be greater than zero".to_string(),
            ));
        }
        if self.config.top_k_topics == 0 {
            return Err(MemoryError::ConfigError(
                "top_k_topics must be greater than zero".to_string(),
            ));
        }
        Ok(self.config)
    }
}
