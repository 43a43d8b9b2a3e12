use std::fmt;
use std::str::FromStr;

use lore_core::config::RetrievalConfig;
use lore_core::errors::RetrievalError;
use serde::{Deserialize, Serialize};

/// Which signal producers a search runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    Keywords,
    Queries,
    Embeddings,
    #[default]
    Unified,
}

impl SearchMode {
    pub const ALL: [SearchMode; 4] = [
        SearchMode::Keywords,
        SearchMode::Queries,
        SearchMode::Embeddings,
        SearchMode::Unified,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SearchMode::Keywords => "keywords",
            SearchMode::Queries => "queries",
            SearchMode::Embeddings => "embeddings",
            SearchMode::Unified => "unified",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = RetrievalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        SearchMode::ALL
            .into_iter()
            .find(|m| m.as_str() == normalized)
            .ok_or_else(|| RetrievalError::UnknownMode {
                mode: s.to_string(),
            })
    }
}

/// Qualitative bucket of a match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrength {
    Strong,
    Partial,
    Weak,
}

impl MatchStrength {
    /// `> strong_threshold` is strong, `>= partial_threshold` partial, else weak.
    pub fn classify(match_score: f64, config: &RetrievalConfig) -> Self {
        if match_score > config.strong_threshold {
            MatchStrength::Strong
        } else if match_score >= config.partial_threshold {
            MatchStrength::Partial
        } else {
            MatchStrength::Weak
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MatchStrength::Strong => "strong",
            MatchStrength::Partial => "partial",
            MatchStrength::Weak => "weak",
        }
    }
}

impl fmt::Display for MatchStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ranked entry in a search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub entry_id: String,
    pub keyword_score: f64,
    pub query_score: f64,
    /// Raw embedding similarity, present only when the embedding index matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding_score: Option<f64>,
    pub match_score: f64,
    pub match_strength: MatchStrength,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_parse_case_insensitively() {
        assert_eq!("Unified".parse::<SearchMode>().unwrap(), SearchMode::Unified);
        assert_eq!(" keywords ".parse::<SearchMode>().unwrap(), SearchMode::Keywords);
        assert!(matches!(
            "fuzzy".parse::<SearchMode>(),
            Err(RetrievalError::UnknownMode { mode }) if mode == "fuzzy"
        ));
    }

    #[test]
    fn classification_boundaries() {
        let config = RetrievalConfig::default();
        assert_eq!(MatchStrength::classify(0.81, &config), MatchStrength::Strong);
        assert_eq!(MatchStrength::classify(0.8, &config), MatchStrength::Partial);
        assert_eq!(MatchStrength::classify(0.4, &config), MatchStrength::Partial);
        assert_eq!(MatchStrength::classify(0.39, &config), MatchStrength::Weak);
    }
}
