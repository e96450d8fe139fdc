//! Memory subsystem for a research-assistant backend.
//!
//! This crate provides:
//! - Fixed-size overlapping text chunking
//! - An embedding seam with unit-normalized vectors and a degraded mode
//! - A swappable vector store abstraction with an in-memory reference adapter
//! - A coordinator that assembles bounded retrieval-augmented context
//! - Citation extraction and URL-based deduplication
//!
//! The external collaborators (web search, page fetching, the LLM call,
//! concrete vector databases) live behind traits and are not implemented
//! here.

pub mod chunking;
pub mod citation;
pub mod config;
pub mod context;
pub mod coordinator;
pub mod document;
pub mod embedding;
pub mod error;
pub mod inmemory;
#[cfg(feature = "openai")]
pub mod openai;
pub mod text;
pub mod vectorstore;

pub use chunking::{Chunker, FixedSizeChunker};
pub use citation::{Citation, SearchHit, dedup_citations, extract_citations, render_citations};
pub use config::{MemoryConfig, MemoryConfigBuilder};
pub use context::ContextFormatter;
pub use coordinator::{MemoryCoordinator, MemoryCoordinatorBuilder};
pub use document::{
    Chunk, EmbeddedChunk, MemoryStats, ScoredChunk, ScoredTopic, SourceDocument, TopicMemory,
};
pub use embedding::Embedder;
pub use error::{MemoryError, Result};
pub use inmemory::InMemoryVectorStore;
#[cfg(feature = "openai")]
pub use openai::OpenAiEmbedder;
pub use vectorstore::{ChunkFilter, Collection, VectorStore};
