//! Document chunking.
//!
//! This module provides the [`Chunker`] trait and [`FixedSizeChunker`], a
//! sliding-window splitter with configurable overlap. Windows are measured
//! in characters with no word or sentence awareness — chunks may split
//! mid-word. That imprecision is inherited deliberately; boundary-aware
//! chunking would change stored offsets and chunk counts.

use crate::error::{MemoryError, Result};

/// A strategy for splitting cleaned document text into chunks.
///
/// Implementations produce plain text chunks; provenance metadata and
/// embeddings are attached later by the coordinator.
pub trait Chunker: Send + Sync {
    /// Split text into chunks.
    ///
    /// Returns an empty `Vec` for empty input.
    fn chunk(&self, text: &str) -> Vec<String>;
}

/// Splits text into fixed-size overlapping windows by character count.
///
/// The window advances by `chunk_size - overlap` characters per step, so
/// each chunk shares its first `overlap` characters with the tail of its
/// predecessor. Text shorter than `chunk_size` is returned as a single
/// chunk. Windows that are entirely whitespace are skipped.
///
/// Offsets are measured in Unicode scalar values, never bytes, so a window
/// can never split a multi-byte character.
#[derive(Debug, Clone)]
pub struct FixedSizeChunker {
    chunk_size: usize,
    overlap: usize,
}

impl FixedSizeChunker {
    /// Create a new `FixedSizeChunker`.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::ConfigError`] unless `0 <= overlap < chunk_size`
    /// (the step must stay ≥ 1 to guarantee termination).
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(MemoryError::ConfigError("chunk_size must be greater than zero".to_string()));
        }
        if overlap >= chunk_size {
            return Err(MemoryError::ConfigError(format!(
                "overlap ({overlap}) must be less than chunk_size ({chunk_size})"
            )));
        }
        Ok(Self { chunk_size, overlap })
    }
}

impl Chunker for FixedSizeChunker {
    fn chunk(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let chars: Vec<char> = text.chars().collect();
        if chars.len() < self.chunk_size {
            return vec![text.to_string()];
        }

        let step = self.chunk_size - self.overlap;
        let mut chunks = Vec::new();
        let mut start = 0;

        while start < chars.len() {
            let end = (start + self.chunk_size).min(chars.len());
            let window: String = chars[start..end].iter().collect();
            if !window.trim().is_empty() {
                chunks.push(window);
            }
            start += step;
        }

        chunks
    }
}
