use std::sync::Arc;

use lore_core::errors::{LoreError, LoreResult};
use lore_core::traits::IEmbeddingProvider;

use super::{MatchSource, SignalHit, SignalKind};

/// Entry embeddings held in memory, searched by brute-force cosine.
///
/// Hit scores are raw similarity; the merge step maps them into a
/// match-score contribution.
pub struct EmbeddingIndex {
    provider: Arc<dyn IEmbeddingProvider>,
    vectors: Vec<(String, Vec<f32>)>,
    min_similarity: f64,
}

impl EmbeddingIndex {
    pub fn new(provider: Arc<dyn IEmbeddingProvider>, min_similarity: f64) -> Self {
        Self {
            provider,
            vectors: Vec::new(),
            min_similarity: lore_core::clamp_unit(min_similarity),
        }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Embed `text` for `entry_id`. Re-inserting an id replaces its vector.
    pub fn insert(&mut self, entry_id: &str, text: &str) -> LoreResult<()> {
        let vector = self.provider.embed(text)?;
        self.put(entry_id, vector);
        Ok(())
    }

    /// Embed many `(entry_id, text)` pairs in one provider call.
    pub fn insert_batch(&mut self, items: &[(String, String)]) -> LoreResult<usize> {
        if items.is_empty() {
            return Ok(0);
        }
        let texts: Vec<String> = items.iter().map(|(_, text)| text.clone()).collect();
        let vectors = self.provider.embed_batch(&texts)?;
        if vectors.len() != items.len() {
            return Err(LoreError::EmbeddingFailed {
                reason: format!(
                    "provider {} returned {} vectors for {} texts",
                    self.provider.name(),
                    vectors.len(),
                    items.len()
                ),
            });
        }
        for ((entry_id, _), vector) in items.iter().zip(vectors) {
            self.put(entry_id, vector);
        }
        Ok(items.len())
    }

    pub fn clear(&mut self) {
        self.vectors.clear();
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    fn put(&mut self, entry_id: &str, vector: Vec<f32>) {
        match self.vectors.iter().position(|(id, _)| id == entry_id) {
            Some(pos) => self.vectors[pos].1 = vector,
            None => self.vectors.push((entry_id.to_string(), vector)),
        }
    }
}

impl MatchSource for EmbeddingIndex {
    fn kind(&self) -> SignalKind {
        SignalKind::Embedding
    }

    fn search(&self, query: &str) -> LoreResult<Vec<SignalHit>> {
        if self.vectors.is_empty() || query.trim().is_empty() {
            return Ok(Vec::new());
        }
        let query_vec = self.provider.embed(query)?;

        Ok(self
            .vectors
            .iter()
            .filter_map(|(entry_id, vector)| {
                let similarity = cosine_similarity(&query_vec, vector);
                (similarity >= self.min_similarity)
                    .then(|| SignalHit::new(entry_id, SignalKind::Embedding, similarity))
            })
            .collect())
    }
}

/// Cosine similarity mapped into `[0, 1]`; opposed or mismatched vectors score 0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;
    for (x, y) in a.iter().zip(b.iter()) {
        let (x, y) = (*x as f64, *y as f64);
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 {
        return 0.0;
    }
    lore_core::clamp_unit(dot / denom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_vectors_score_one() {
        let v = vec![1.0, 2.0, 3.0];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn orthogonal_and_opposed_vectors_score_zero() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]), 0.0);
    }

    #[test]
    fn mismatched_or_zero_vectors_score_zero() {
        assert_eq!(cosine_similarity(&[1.0], &[1.0, 0.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
    }
}
