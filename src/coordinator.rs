//! Memory coordinator: orchestrates chunk → embed → store on ingest and
//! embed → search → format on recall.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use research_memory::{MemoryConfig, MemoryCoordinator, InMemoryVectorStore};
//!
//! let coordinator = MemoryCoordinator::builder()
//!     .config(MemoryConfig::default())
//!     .embedder(Arc::new(my_embedder))
//!     .store(Arc::new(InMemoryVectorStore::new()))
//!     .build()?;
//!
//! let ids = coordinator.write_chunks("rust async runtimes", &documents).await?;
//! let context = coordinator.recall("rust async runtimes").await;
//! ```

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};

use crate::chunking::{Chunker, FixedSizeChunker};
use crate::citation::extract_domain;
use crate::config::MemoryConfig;
use crate::context::ContextFormatter;
use crate::document::{Chunk, EmbeddedChunk, MemoryStats, SourceDocument, TopicMemory};
use crate::embedding::Embedder;
use crate::error::{MemoryError, Result};
use crate::text::clean_insights;
use crate::vectorstore::VectorStore;

/// Orchestrates the memory subsystem: owns chunk-size and overlap policy
/// and the context-assembly budget, and wires the [`Chunker`],
/// [`Embedder`], and [`VectorStore`] together.
///
/// Construct one per process via [`MemoryCoordinator::builder()`] and share
/// it; all collaborators are injected, immutable, and internally
/// synchronized, so concurrent research requests need no locking here.
///
/// Error policy: write-path failures surface to the caller (partial writes
/// are not rolled back), read-path failures degrade to empty results so
/// summarization proceeds without RAG context.
pub struct MemoryCoordinator {
    config: MemoryConfig,
    embedder: Arc<dyn Embedder>,
    store: Arc<dyn VectorStore>,
    chunker: Arc<dyn Chunker>,
    formatter: ContextFormatter,
}

impl MemoryCoordinator {
    /// Create a new [`MemoryCoordinatorBuilder`].
    pub fn builder() -> MemoryCoordinatorBuilder {
        MemoryCoordinatorBuilder::default()
    }

    /// Return a reference to the coordinator configuration.
    pub fn config(&self) -> &MemoryConfig {
        &self.config
    }

    /// Ingest cleaned documents for one research query: chunk each
    /// document, embed all chunks in a single batch, and persist them with
    /// provenance. Returns the storage IDs of the persisted chunks.
    ///
    /// Documents with empty cleaned text are skipped. If nothing remains,
    /// returns an empty `Vec` — a valid terminal state, not an error. If
    /// the embedder is unavailable, chunks are persisted without vectors.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::StoreWriteError`] if persistence fails, and
    /// propagates embedding failures other than degraded-mode
    /// unavailability.
    pub async fn write_chunks(
        &self,
        query: &str,
        documents: &[SourceDocument],
    ) -> Result<Vec<String>> {
        let mut chunks: Vec<Chunk> = Vec::new();

        for document in documents {
            if document.cleaned_text.is_empty() {
                continue;
            }
            let created_at = Utc::now();
            for (chunk_index, text) in self.chunker.chunk(&document.cleaned_text).into_iter().enumerate()
            {
                chunks.push(Chunk {
                    text,
                    source_title: document.title.clone(),
                    source_url: document.url.clone(),
                    source_domain: extract_domain(&document.url),
                    chunk_index,
                    query: query.to_string(),
                    created_at,
                });
            }
        }

        if chunks.is_empty() {
            info!(query, "no content to store");
            return Ok(Vec::new());
        }

        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        let vectors = match self.embedder.embed_batch(&texts).await {
            Ok(vectors) => vectors.into_iter().map(Some).collect::<Vec<_>>(),
            Err(MemoryError::EmbeddingUnavailable) => {
                warn!(query, chunk_count = chunks.len(), "embedder unavailable, storing chunks without vectors");
                vec![None; chunks.len()]
            }
            Err(e) => {
                error!(query, error = %e, "embedding failed during ingest");
                return Err(e);
            }
        };

        let embedded: Vec<EmbeddedChunk> = chunks
            .into_iter()
            .zip(vectors)
            .map(|(chunk, vector)| EmbeddedChunk { chunk, vector })
            .collect();

        let ids = self.store.write_chunks(&embedded).await.inspect_err(|e| {
            error!(query, error = %e, "vector store write failed during ingest");
        })?;

        info!(query, chunk_count = ids.len(), "stored research chunks");
        Ok(ids)
    }

    /// Store the summary of a completed research session as a topic memory.
    ///
    /// Insights are cleaned before storage: markdown stripped, bullet
    /// prefixes removed, deduplicated, at most five kept. The summary text
    /// is embedded for future topic-similarity retrieval; if the embedder
    /// is unavailable the memory is stored without a vector.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::StoreWriteError`] if persistence fails.
    pub async fn write_summary(
        &self,
        query: &str,
        summary: &str,
        key_findings: &str,
        insights: &[String],
        sources_count: usize,
    ) -> Result<String> {
        let vector = match self.embedder.embed(summary).await {
            Ok(vector) => Some(vector),
            Err(MemoryError::EmbeddingUnavailable) => {
                warn!(query, "embedder unavailable, storing summary without vector");
                None
            }
            Err(e) => {
                error!(query, error = %e, "embedding failed for summary");
                return Err(e);
            }
        };

        let topic = TopicMemory {
            query: query.to_string(),
            summary_text: summary.to_string(),
            key_findings: key_findings.to_string(),
            insights: clean_insights(insights),
            sources_count,
            created_at: Utc::now(),
        };

        let id = self.store.write_topic(&topic, vector.as_deref()).await.inspect_err(|e| {
            error!(query, error = %e, "vector store write failed for summary");
        })?;

        info!(query, memory_id = %id, "stored topic memory");
        Ok(id)
    }

    /// Assemble retrieval-augmented context for a query.
    ///
    /// Embeds the query, retrieves the configured number of research
    /// chunks and past topic summaries, and renders them into one block
    /// bounded by `rag_context_max_chars`. Returns an empty string when
    /// nothing relevant is stored, the embedder is unavailable, or the
    /// store read fails — read-path failures never surface past here.
    pub async fn recall(&self, query: &str) -> String {
        let query_vector = match self.embedder.embed(query).await {
            Ok(vector) => vector,
            Err(MemoryError::EmbeddingUnavailable) => {
                warn!(query, "embedder unavailable, recall degraded to no context");
                return String::new();
            }
            Err(e) => {
                warn!(query, error = %e, "query embedding failed, recall degraded to no context");
                return String::new();
            }
        };

        let chunks = match self
            .store
            .search_chunks(&query_vector, self.config.top_k_chunks, None)
            .await
        {
            Ok(chunks) => chunks,
            Err(e) => {
                warn!(query, error = %e, "chunk search failed, continuing without chunks");
                Vec::new()
            }
        };

        let topics = match self.store.search_topics(&query_vector, self.config.top_k_topics).await {
            Ok(topics) => topics,
            Err(e) => {
                warn!(query, error = %e, "topic search failed, continuing without past research");
                Vec::new()
            }
        };

        let context =
            self.formatter.format_within(&chunks, &topics, self.config.rag_context_max_chars);
        info!(
            query,
            chunk_count = chunks.len(),
            topic_count = topics.len(),
            context_chars = context.chars().count(),
            "assembled memory context"
        );
        context
    }

    /// Return record counts for both collections.
    pub async fn stats(&self) -> Result<MemoryStats> {
        self.store.stats().await
    }
}

/// Builder for constructing a [`MemoryCoordinator`].
///
/// `config`, `embedder`, and `store` are required; the chunker defaults to
/// a [`FixedSizeChunker`] sized from the config.
#[derive(Default)]
pub struct MemoryCoordinatorBuilder {
    config: Option<MemoryConfig>,
    embedder: Option<Arc<dyn Embedder>>,
    store: Option<Arc<dyn VectorStore>>,
    chunker: Option<Arc<dyn Chunker>>,
}

impl MemoryCoordinatorBuilder {
    /// Set the coordinator configuration.
    pub fn config(mut self, config: MemoryConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the embedding provider.
    pub fn embedder(mut self, embedder: Arc<dyn Embedder>) -> Self {
        self.embedder = Some(embedder);
        self
    }

    /// Set the vector store backend.
    pub fn store(mut self, store: Arc<dyn VectorStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Override the default chunking strategy.
    pub fn chunker(mut self, chunker: Arc<dyn Chunker>) -> Self {
        self.chunker = Some(chunker);
        self
    }

    /// Build the [`MemoryCoordinator`], validating that all required
    /// collaborators are set.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::ConfigError`] if a required field is missing
    /// or the configured chunk size and overlap are inconsistent.
    pub fn build(self) -> Result<MemoryCoordinator> {
        let config =
            self.config.ok_or_else(|| MemoryError::ConfigError("config is required".to_string()))?;
        let embedder = self
            .embedder
            .ok_or_else(|| MemoryError::ConfigError("embedder is required".to_string()))?;
        let store =
            self.store.ok_or_else(|| MemoryError::ConfigError("store is required".to_string()))?;
        let chunker: Arc<dyn Chunker> = match self.chunker {
            Some(chunker) => chunker,
            None => Arc::new(FixedSizeChunker::new(config.chunk_size, config.chunk_overlap)?),
        };

        Ok(MemoryCoordinator {
            config,
            embedder,
            store,
            chunker,
            formatter: ContextFormatter::new(),
        })
    }
}
