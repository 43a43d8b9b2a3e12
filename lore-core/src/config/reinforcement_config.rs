use serde::{Deserialize, Serialize};

use super::defaults;

/// Reinforcement tracker configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReinforcementConfig {
    /// Minimum similarity for a new entry to reinforce an existing one.
    pub dedup_similarity: f64,
    /// Harm ratio above which an entry is flagged for review.
    pub review_harm_ratio: f64,
    /// Signal count above which low helpfulness flags an entry.
    pub review_min_signals: u64,
    /// Helpfulness ratio below which a well-signalled entry is flagged.
    pub review_min_helpfulness: f64,
    /// Minimum signals before an entry can rank as a top performer.
    pub top_performer_min_signals: u64,
}

impl Default for ReinforcementConfig {
    fn default() -> Self {
        Self {
            dedup_similarity: defaults::DEFAULT_DEDUP_SIMILARITY,
            review_harm_ratio: defaults::DEFAULT_REVIEW_HARM_RATIO,
            review_min_signals: defaults::DEFAULT_REVIEW_MIN_SIGNALS,
            review_min_helpfulness: defaults::DEFAULT_REVIEW_MIN_HELPFULNESS,
            top_performer_min_signals: defaults::DEFAULT_TOP_PERFORMER_MIN_SIGNALS,
        }
    }
}
