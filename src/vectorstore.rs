//! Vector store trait: the seam between the memory core and its storage backend.

use async_trait::async_trait;

use crate::document::{EmbeddedChunk, MemoryStats, ScoredChunk, ScoredTopic, TopicMemory};
use crate::error::Result;

/// The two logical collections every backend must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// Chunked page content from past research runs.
    ResearchChunks,
    /// Summaries of completed research sessions.
    TopicMemory,
}

impl Collection {
    /// Stable backend-facing name of the collection.
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::ResearchChunks => "research_chunks",
            Collection::TopicMemory => "topic_memory",
        }
    }
}

/// Optional filter applied to chunk search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChunkFilter {
    /// Restrict results to chunks whose provenance query equals this text.
    pub query_text: Option<String>,
}

/// A storage backend for embedded chunks and topic memories.
///
/// Backends must rank search results by descending similarity with ties
/// broken by insertion order, and must normalize their native metric so
/// that 1.0 always means identical (`similarity = 1 - distance` for
/// backends reporting cosine distance). Writes are append-only; records
/// are immutable once stored and only bulk-deleted via [`clear`](VectorStore::clear).
///
/// Implementations must support safe concurrent reads and writes; the core
/// does no locking of its own.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Persist embedded chunks, returning one storage ID per chunk in order.
    ///
    /// Chunks with `vector: None` are stored for their text and metadata
    /// but excluded from similarity ranking.
    async fn write_chunks(&self, chunks: &[EmbeddedChunk]) -> Result<Vec<String>>;

    /// Persist a topic memory with the embedding of its summary text
    /// (`None` when the embedder was unavailable). Returns the storage ID.
    async fn write_topic(&self, topic: &TopicMemory, vector: Option<&[f32]>) -> Result<String>;

    /// Return the `top_k` chunks most similar to `query_vector`, ranked
    /// descending, optionally restricted by a provenance filter.
    async fn search_chunks(
        &self,
        query_vector: &[f32],
        top_k: usize,
        filter: Option<&ChunkFilter>,
    ) -> Result<Vec<ScoredChunk>>;

    /// Return the `top_k` topic memories most similar to `query_vector`,
    /// ranked descending.
    async fn search_topics(&self, query_vector: &[f32], top_k: usize) -> Result<Vec<ScoredTopic>>;

    /// Return record counts for both collections.
    async fn stats(&self) -> Result<MemoryStats>;

    /// Delete every record in one collection. Destructive; intended for
    /// maintenance and tests.
    async fn clear(&self, collection: Collection) -> Result<()>;
}
