use serde::{Deserialize, Serialize};

use super::defaults;

/// Cache lookup configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Weight of the query-template score in unified mode.
    pub query_weight: f64,
    /// Weight of the keyword score in unified mode.
    pub keyword_weight: f64,
    /// Scores strictly above this are `strong`.
    pub strong_threshold: f64,
    /// Scores at or above this (and not strong) are `partial`.
    pub partial_threshold: f64,
    /// Floor of an embedding hit's contribution.
    pub embedding_base: f64,
    /// Span added on top of `embedding_base` at similarity 1.0.
    pub embedding_scale: f64,
    /// Embedding hits below this similarity are discarded.
    pub embedding_min_similarity: f64,
    /// Query-template hits below this similarity are discarded.
    pub query_min_similarity: f64,
    pub default_min_score: f64,
    pub default_limit: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            query_weight: defaults::DEFAULT_QUERY_WEIGHT,
            keyword_weight: defaults::DEFAULT_KEYWORD_WEIGHT,
            strong_threshold: defaults::DEFAULT_STRONG_THRESHOLD,
            partial_threshold: defaults::DEFAULT_PARTIAL_THRESHOLD,
            embedding_base: defaults::DEFAULT_EMBEDDING_BASE,
            embedding_scale: defaults::DEFAULT_EMBEDDING_SCALE,
            embedding_min_similarity: defaults::DEFAULT_EMBEDDING_MIN_SIMILARITY,
            query_min_similarity: defaults::DEFAULT_QUERY_MIN_SIMILARITY,
            default_min_score: defaults::DEFAULT_MIN_SCORE,
            default_limit: defaults::DEFAULT_SEARCH_LIMIT,
        }
    }
}
