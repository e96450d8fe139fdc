//! Embedder trait and vector similarity math.

use async_trait::async_trait;

use crate::error::Result;

/// A provider that maps text to fixed-dimension dense vectors.
///
/// All vectors produced by one instance share the dimension reported by
/// [`dimensions`](Embedder::dimensions) and are unit-normalized, so cosine
/// similarity downstream is a plain dot product.
///
/// A provider may be in degraded mode (model not loadable, remote backend
/// disabled). In that mode `embed` returns
/// [`MemoryError::EmbeddingUnavailable`](crate::MemoryError::EmbeddingUnavailable);
/// callers treat this as a non-fatal skip, never as a zero vector.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Generate a unit-normalized embedding for a single text input.
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Generate embeddings for a batch of text inputs, in input order.
    ///
    /// Batched encoding must agree element-for-element with encoding each
    /// item individually; the default implementation guarantees this by
    /// calling [`embed`](Embedder::embed) sequentially. Backends with
    /// native batching may override it, but must preserve that property.
    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            results.push(self.embed(text).await?);
        }
        Ok(results)
    }

    /// Return the dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;
}

/// Dot product of two embeddings.
///
/// When both vectors are unit-normalized this equals their cosine
/// similarity, in [-1, 1], with 1.0 meaning identical.
pub fn similarity(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Scale a vector to unit L2 norm in place. Zero vectors are left unchanged.
pub fn normalize(v: &mut [f32]) {
    let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_produces_unit_norm() {
        let mut v = vec![3.0, 4.0];
        normalize(&mut v);
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_leaves_zero_vector() {
        let mut v = vec![0.0, 0.0, 0.0];
        normalize(&mut v);
        assert_eq!(v, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_self_similarity_is_one() {
        let mut v = vec![0.2, -0.5, 0.7, 0.1];
        normalize(&mut v);
        assert!((similarity(&v, &v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_similarity_bounds_for_normalized_vectors() {
        let mut a = vec![1.0, 2.0, -3.0];
        let mut b = vec![-4.0, 0.5, 2.0];
        normalize(&mut a);
        normalize(&mut b);
        let s = similarity(&a, &b);
        assert!((-1.0001..=1.0001).contains(&s));
    }
}
