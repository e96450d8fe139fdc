//! In-memory vector store using cosine similarity.
//!
//! [`InMemoryVectorStore`] is the reference [`VectorStore`] adapter: an
//! insertion-ordered store behind a `tokio::sync::RwLock`, suitable for
//! development, testing, and small single-process deployments. Remote
//! backends implement the same trait out of crate.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::document::{EmbeddedChunk, MemoryStats, ScoredChunk, ScoredTopic, TopicMemory};
use crate::embedding::similarity;
use crate::error::Result;
use crate::vectorstore::{ChunkFilter, Collection, VectorStore};

struct StoredChunk {
    id: String,
    record: EmbeddedChunk,
}

struct StoredTopic {
    topic: TopicMemory,
    vector: Option<Vec<f32>>,
}

#[derive(Default)]
struct Inner {
    chunks: Vec<StoredChunk>,
    topics: Vec<StoredTopic>,
}

/// An in-memory [`VectorStore`] ranked by cosine similarity.
///
/// Records are kept in insertion order; `sort_by` is stable, so equal
/// similarities tie-break by insertion order as the trait requires.
#[derive(Default)]
pub struct InMemoryVectorStore {
    inner: RwLock<Inner>,
}

impl InMemoryVectorStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VectorStore for InMemoryVectorStore {
    async fn write_chunks(&self, chunks: &[EmbeddedChunk]) -> Result<Vec<String>> {
        let mut inner = self.inner.write().await;
        let mut ids = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            let id = Uuid::new_v4().to_string();
            inner.chunks.push(StoredChunk { id: id.clone(), record: chunk.clone() });
            ids.push(id);
        }
        Ok(ids)
    }

    async fn write_topic(&self, topic: &TopicMemory, vector: Option<&[f32]>) -> Result<String> {
        let mut inner = self.inner.write().await;
        inner.topics.push(StoredTopic { topic: topic.clone(), vector: vector.map(<[f32]>::to_vec) });
        Ok(Uuid::new_v4().to_string())
    }

    async fn search_chunks(
        &self,
        query_vector: &[f32],
        top_k: usize,
        filter: Option<&ChunkFilter>,
    ) -> Result<Vec<ScoredChunk>> {
        let inner = self.inner.read().await;

        let mut scored: Vec<ScoredChunk> = inner
            .chunks
            .iter()
            .filter(|stored| match filter.and_then(|f| f.query_text.as_deref()) {
                Some(query_text) => stored.record.chunk.query == query_text,
                None => true,
            })
            .filter_map(|stored| {
                let vector = stored.record.vector.as_deref()?;
                Some(ScoredChunk {
                    chunk: stored.record.chunk.clone(),
                    similarity: similarity(vector, query_vector),
                })
            })
            .collect();

        scored.sort_by(|a, b| {
            b.similarity.partial_cmp(&a.similarity).unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(top_k);
        Ok(scored)
    }

    async fn search_topics(&self, query_vector: &[f32], top_k: usize) -> Result<Vec<ScoredTopic>> {
        let inner = self.inner.read().await;

        let mut scored: Vec<ScoredTopic> = inner
            .topics
            .iter()
            .filter_map(|stored| {
                let vector = stored.vector.as_deref()?;
                Some(ScoredTopic {
                    topic: stored.topic.clone(),
                    similarity: similarity(vector, query_vector),
                })
            })
            .collect();

        scored.sort_by(|a, b| {
            b.similarity.partial_cmp(&a.similarity).unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(top_k);
        Ok(scored)
    }

    async fn stats(&self) -> Result<MemoryStats> {
        let inner = self.inner.read().await;
        Ok(MemoryStats { chunk_count: inner.chunks.len(), topic_count: inner.topics.len() })
    }

    async fn clear(&self, collection: Collection) -> Result<()> {
        let mut inner = self.inner.write().await;
        match collection {
            Collection::ResearchChunks => inner.chunks.clear(),
            Collection::TopicMemory => inner.topics.clear(),
        }
        Ok(())
    }
}
