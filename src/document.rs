//! Data types for source documents, chunks, topic memories, and retrieval results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A cleaned source document ready for ingestion, with its provenance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceDocument {
    /// Title of the source page.
    pub title: String,
    /// URL the document was fetched from.
    pub url: String,
    /// Cleaned text content. May be empty if extraction failed; empty
    /// documents are skipped during ingestion.
    pub cleaned_text: String,
}

impl SourceDocument {
    /// Create a document from its title, URL, and cleaned text.
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        cleaned_text: impl Into<String>,
    ) -> Self {
        Self { title: title.into(), url: url.into(), cleaned_text: cleaned_text.into() }
    }
}

/// A contiguous substring of a source document, the atomic unit of storage.
///
/// Chunks are immutable once written: they are only queried or bulk-deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chunk {
    /// The chunk text. Never empty; at most `chunk_size` characters except
    /// that the final chunk of a document may be shorter.
    pub text: String,
    /// Title of the source document.
    pub source_title: String,
    /// URL of the source document.
    pub source_url: String,
    /// Domain of the source URL (e.g. `example.com`).
    pub source_domain: String,
    /// Position within the source document's chunk sequence, starting at 0.
    pub chunk_index: usize,
    /// The research query that produced this ingest (provenance).
    pub query: String,
    /// When the chunk was created.
    pub created_at: DateTime<Utc>,
}

/// A [`Chunk`] paired with its embedding vector.
///
/// `vector` is `None` when the embedding backend was unavailable at ingest
/// time; such chunks are persisted for their text and metadata but do not
/// participate in similarity ranking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbeddedChunk {
    /// The chunk itself.
    pub chunk: Chunk,
    /// The unit-normalized embedding of `chunk.text`, if available.
    pub vector: Option<Vec<f32>>,
}

/// A persisted summary of a completed research session, embedded for
/// future topic-similarity retrieval.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopicMemory {
    /// The research query that was summarized.
    pub query: String,
    /// Executive summary text (this is what gets embedded).
    pub summary_text: String,
    /// Key findings text.
    pub key_findings: String,
    /// Up to five deduplicated, markdown-stripped insights.
    pub insights: Vec<String>,
    /// Number of sources the summary drew on.
    pub sources_count: usize,
    /// When the summary was stored.
    pub created_at: DateTime<Utc>,
}

/// A retrieved [`Chunk`] paired with its similarity to the query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredChunk {
    /// The retrieved chunk.
    pub chunk: Chunk,
    /// Similarity score in [-1, 1]; 1.0 means identical.
    pub similarity: f32,
}

/// A retrieved [`TopicMemory`] paired with its similarity to the query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredTopic {
    /// The retrieved topic memory.
    pub topic: TopicMemory,
    /// Similarity score in [-1, 1]; 1.0 means identical.
    pub similarity: f32,
}

/// Counts of stored records, per logical collection.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemoryStats {
    /// Number of stored research chunks.
    pub chunk_count: usize,
    /// Number of stored topic memories.
    pub topic_count: usize,
}
