//! Rendering retrieved memory into a bounded prompt-context block.

use crate::document::{ScoredChunk, ScoredTopic};

/// Characters of chunk body included per entry.
const CHUNK_BODY_CHARS: usize = 500;

/// Characters of topic summary included per entry.
const TOPIC_BODY_CHARS: usize = 400;

/// Renders retrieved chunks and past topic summaries into a single text
/// block for prompt injection.
///
/// Inputs are expected ranked descending by similarity, as returned by the
/// vector store. The formatter itself does not cap total output length;
/// [`format_within`](ContextFormatter::format_within) applies the caller's
/// overall context budget by dropping the lowest-similarity entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextFormatter;

impl ContextFormatter {
    /// Create a new formatter.
    pub fn new() -> Self {
        Self
    }

    /// Render both result lists into one labeled context block.
    ///
    /// Returns an empty string when both inputs are empty.
    pub fn format(&self, chunks: &[ScoredChunk], topics: &[ScoredTopic]) -> String {
        let mut parts: Vec<String> = Vec::new();

        if !chunks.is_empty() {
            parts.push("## RELEVANT MEMORY CHUNKS FROM PAST RESEARCH:\n".to_string());
            for (i, scored) in chunks.iter().enumerate() {
                parts.push(format!(
                    "### Memory {} (Relevance: {:.2}%) - {}",
                    i + 1,
                    scored.similarity * 100.0,
                    scored.chunk.source_title,
                ));
                if !scored.chunk.source_url.is_empty() {
                    parts.push(format!("Source: {}", scored.chunk.source_url));
                }
                parts.push(scored.chunk.text.chars().take(CHUNK_BODY_CHARS).collect());
                parts.push(String::new());
            }
        }

        if !topics.is_empty() {
            parts.push("\n## RELATED PAST RESEARCH SUMMARIES:\n".to_string());
            for (i, scored) in topics.iter().enumerate() {
                parts.push(format!(
                    "### Past Research {} (Relevance: {:.2}%)",
                    i + 1,
                    scored.similarity * 100.0,
                ));
                parts.push(format!("Query: {}", scored.topic.query));
                parts.push(format!(
                    "Summary: {}",
                    scored.topic.summary_text.chars().take(TOPIC_BODY_CHARS).collect::<String>(),
                ));
                parts.push(String::new());
            }
        }

        parts.join("\n")
    }

    /// Render within an overall character budget.
    ///
    /// While the rendered block exceeds `max_chars`, the entry with the
    /// lowest similarity across both (descending-ranked) lists is dropped
    /// from its tail and the block is re-rendered. Returns an empty string
    /// if nothing fits.
    pub fn format_within(
        &self,
        chunks: &[ScoredChunk],
        topics: &[ScoredTopic],
        max_chars: usize,
    ) -> String {
        let mut chunks = chunks.to_vec();
        let mut topics = topics.to_vec();

        loop {
            let rendered = self.format(&chunks, &topics);
            if rendered.chars().count() <= max_chars {
                return rendered;
            }

            let last_chunk = chunks.last().map(|c| c.similarity);
            let last_topic = topics.last().map(|t| t.similarity);
            match (last_chunk, last_topic) {
                (Some(c), Some(t)) => {
                    if c <= t {
                        chunks.pop();
                    } else {
                        topics.pop();
                    }
                }
                (Some(_), None) => {
                    chunks.pop();
                }
                (None, Some(_)) => {
                    topics.pop();
                }
                (None, None) => return String::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Chunk, TopicMemory};
    use chrono::Utc;

    fn scored_chunk(text: &str, title: &str, similarity: f32) -> ScoredChunk {
        ScoredChunk {
            chunk: Chunk {
                text: text.to_string(),
                source_title: title.to_string(),
                source_url: "https://example.com/a".to_string(),
                source_domain: "example.com".to_string(),
                chunk_index: 0,
                query: "q".to_string(),
                created_at: Utc::now(),
            },
            similarity,
        }
    }

    fn scored_topic(summary: &str, similarity: f32) -> ScoredTopic {
        ScoredTopic {
            topic: TopicMemory {
                query: "past query".to_string(),
                summary_text: summary.to_string(),
                key_findings: String::new(),
                insights: vec![],
                sources_count: 2,
                created_at: Utc::now(),
            },
            similarity,
        }
    }

    #[test]
    fn test_empty_inputs_render_empty_string() {
        let formatter = ContextFormatter::new();
        assert_eq!(formatter.format(&[], &[]), "");
    }

    #[test]
    fn test_sections_and_relevance_percentages() {
        let formatter = ContextFormatter::new();
        let out = formatter.format(
            &[scored_chunk("chunk body", "Some Page", 0.8732)],
            &[scored_topic("past summary", 0.5)],
        );
        assert!(out.contains("## RELEVANT MEMORY CHUNKS FROM PAST RESEARCH:"));
        assert!(out.contains("### Memory 1 (Relevance: 87.32%) - Some Page"));
        assert!(out.contains("Source: https://example.com/a"));
        assert!(out.contains("## RELATED PAST RESEARCH SUMMARIES:"));
        assert!(out.contains("### Past Research 1 (Relevance: 50.00%)"));
        assert!(out.contains("Query: past query"));
        assert!(out.contains("Summary: past summary"));
    }

    #[test]
    fn test_bodies_are_truncated() {
        let formatter = ContextFormatter::new();
        let long = "x".repeat(2000);
        let out = formatter.format(&[scored_chunk(&long, "t", 0.9)], &[scored_topic(&long, 0.9)]);
        assert!(out.contains(&"x".repeat(500)));
        assert!(!out.contains(&"x".repeat(501)));
    }

    #[test]
    fn test_budget_drops_lowest_similarity_first() {
        let formatter = ContextFormatter::new();
        let chunks =
            vec![scored_chunk(&"a".repeat(400), "high", 0.9), scored_chunk(&"b".repeat(400), "low", 0.2)];
        let topics = vec![scored_topic(&"c".repeat(300), 0.6)];

        let full_len = formatter.format(&chunks, &topics).chars().count();
        let out = formatter.format_within(&chunks, &topics, full_len - 1);

        // The 0.2-similarity chunk goes first; the rest survives.
        assert!(out.contains("high"));
        assert!(out.contains("RELATED PAST RESEARCH"));
        assert!(!out.contains("low"));
    }

    #[test]
    fn test_budget_of_zero_renders_empty() {
        let formatter = ContextFormatter::new();
        let out = formatter.format_within(&[scored_chunk("body", "t", 0.9)], &[], 0);
        assert_eq!(out, "");
    }
}
