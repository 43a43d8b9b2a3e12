//! Signal producers. Each scores entries against a query independently;
//! [`crate::merge`] combines their hits.

mod embedding_index;
mod keyword_index;
mod query_index;

pub use embedding_index::{cosine_similarity, EmbeddingIndex};
pub use keyword_index::KeywordIndex;
pub use query_index::QueryIndex;

use lore_core::errors::LoreResult;
use serde::{Deserialize, Serialize};

/// Which producer a hit came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    Keyword,
    Query,
    Embedding,
}

/// One producer's score for one entry, in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalHit {
    pub entry_id: String,
    pub kind: SignalKind,
    pub score: f64,
}

impl SignalHit {
    pub fn new(entry_id: impl Into<String>, kind: SignalKind, score: f64) -> Self {
        Self {
            entry_id: entry_id.into(),
            kind,
            score: lore_core::clamp_unit(score),
        }
    }
}

/// A search signal producer.
pub trait MatchSource {
    fn kind(&self) -> SignalKind;

    /// Hits for `query`, in the producer's index order.
    fn search(&self, query: &str) -> LoreResult<Vec<SignalHit>>;
}
