//! Property tests for chunking, search ordering, and citation dedup.

use chrono::Utc;
use proptest::prelude::*;
use research_memory::chunking::{Chunker, FixedSizeChunker};
use research_memory::citation::{Citation, dedup_citations};
use research_memory::document::{Chunk, EmbeddedChunk};
use research_memory::embedding::normalize;
use research_memory::inmemory::InMemoryVectorStore;
use research_memory::vectorstore::VectorStore;

/// Generate a non-zero embedding of the given dimension, unit-normalized
/// through the crate's own [`normalize`].
fn arb_normalized_embedding(dim: usize) -> impl Strategy<Value = Vec<f32>> {
    proptest::collection::vec(-1.0f32..1.0f32, dim).prop_filter_map(
        "non-zero embedding",
        |mut v| {
            let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
            if norm < 1e-8 {
                return None;
            }
            normalize(&mut v);
            let unit: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
            debug_assert!((unit - 1.0).abs() < 1e-5);
            Some(v)
        },
    )
}

/// Generate an embedded chunk with a normalized vector.
fn arb_chunk(dim: usize) -> impl Strategy<Value = EmbeddedChunk> {
    ("[a-z ]{5,30}", arb_normalized_embedding(dim)).prop_map(|(text, vector)| EmbeddedChunk {
        chunk: Chunk {
            text,
            source_title: "title".to_string(),
            source_url: "https://example.com/page".to_string(),
            source_domain: "example.com".to_string(),
            chunk_index: 0,
            query: "query".to_string(),
            created_at: Utc::now(),
        },
        vector: Some(vector),
    })
}

/// Generate a citation whose URL may be empty.
fn arb_citation() -> impl Strategy<Value = Citation> {
    ("[a-z]{3,10}", proptest::option::of("[a-z]{3,8}")).prop_map(|(title, host)| Citation {
        id: 0,
        url: host.map(|h| format!("https://{h}.com")).unwrap_or_default(),
        domain: String::new(),
        snippet: String::new(),
        published_date: None,
        title,
    })
}

mod prop_search_ordering {
    use super::*;

    const DIM: usize = 16;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// For any set of embedded chunks, search returns at most top_k
        /// results ordered by descending similarity.
        #[test]
        fn results_ordered_descending_and_bounded_by_top_k(
            chunks in proptest::collection::vec(arb_chunk(DIM), 1..20),
            query in arb_normalized_embedding(DIM),
            top_k in 1usize..25,
        ) {
            let rt = tokio::runtime::Runtime::new().unwrap();
            let (results, stored) = rt.block_on(async {
                let store = InMemoryVectorStore::new();
                store.write_chunks(&chunks).await.unwrap();
                let results = store.search_chunks(&query, top_k, None).await.unwrap();
                (results, chunks.len())
            });

            prop_assert!(results.len() <= top_k);
            prop_assert!(results.len() <= stored);

            for window in results.windows(2) {
                prop_assert!(
                    window[0].similarity >= window[1].similarity,
                    "results not in descending order: {} < {}",
                    window[0].similarity,
                    window[1].similarity,
                );
            }
        }
    }
}

mod prop_chunk_coverage {
    use super::*;

    const CHUNK_SIZE: usize = 1000;
    const OVERLAP: usize = 100;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        /// Dropping each chunk's leading overlap and concatenating
        /// reconstructs the original text: the windows cover it with no
        /// gaps.
        #[test]
        fn chunks_cover_text_without_gaps(text in "[a-z]{1000,4000}") {
            let chunker = FixedSizeChunker::new(CHUNK_SIZE, OVERLAP).unwrap();
            let chunks = chunker.chunk(&text);

            let step = CHUNK_SIZE - OVERLAP;
            let expected = text.len().div_ceil(step);
            prop_assert_eq!(chunks.len(), expected);

            let mut rebuilt = chunks[0].clone();
            for chunk in &chunks[1..] {
                rebuilt.extend(chunk.chars().skip(OVERLAP));
            }
            prop_assert_eq!(rebuilt, text);
        }

        /// Every chunk respects the size bound, and every non-final chunk
        /// extends past the next window's start (ascending offsets leave
        /// no window empty).
        #[test]
        fn chunk_sizes_bounded(text in "[a-z]{1000,4000}") {
            let chunker = FixedSizeChunker::new(CHUNK_SIZE, OVERLAP).unwrap();
            let chunks = chunker.chunk(&text);

            for chunk in &chunks {
                prop_assert!(chunk.len() <= CHUNK_SIZE);
            }
            for chunk in &chunks[..chunks.len() - 1] {
                prop_assert!(chunk.len() > CHUNK_SIZE - OVERLAP);
            }
        }
    }
}

mod prop_citation_dedup {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Dedup is idempotent and always leaves contiguous 1..=N IDs.
        #[test]
        fn dedup_idempotent_with_contiguous_ids(
            citations in proptest::collection::vec(arb_citation(), 0..15),
        ) {
            let once = dedup_citations(citations);
            let ids: Vec<usize> = once.iter().map(|c| c.id).collect();
            let expected: Vec<usize> = (1..=once.len()).collect();
            prop_assert_eq!(ids, expected);

            let twice = dedup_citations(once.clone());
            prop_assert_eq!(once, twice);
        }

        /// Non-empty URLs are unique after dedup; empty-URL entries all
        /// survive.
        #[test]
        fn urls_unique_and_empty_urls_kept(
            citations in proptest::collection::vec(arb_citation(), 0..15),
        ) {
            let empty_before = citations.iter().filter(|c| c.url.is_empty()).count();
            let deduped = dedup_citations(citations);

            let mut urls: Vec<String> = deduped
                .iter()
                .filter(|c| !c.url.is_empty())
                .map(|c| c.url.to_lowercase())
                .collect();
            let total = urls.len();
            urls.sort();
            urls.dedup();
            prop_assert_eq!(urls.len(), total);

            let empty_after = deduped.iter().filter(|c| c.url.is_empty()).count();
            prop_assert_eq!(empty_before, empty_after);
        }
    }
}
