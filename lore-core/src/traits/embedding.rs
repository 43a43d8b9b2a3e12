use crate::errors::LoreResult;

/// Embedding generation provider backing the optional embedding index.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a vector of floats.
    fn embed(&self, text: &str) -> LoreResult<Vec<f32>>;

    /// Embed a batch of texts. Defaults to one call per text.
    fn embed_batch(&self, texts: &[String]) -> LoreResult<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.embed(t)).collect()
    }

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
