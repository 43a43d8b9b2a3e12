//! Folding signal hits into ranked results.
//!
//! Hits are grouped per entry in first-appearance order. Each signal keeps
//! its best score for the entry, the mode picks how the signals combine,
//! and a stable sort keeps first-appearance order among equal scores.

use std::collections::HashMap;

use lore_core::config::RetrievalConfig;

use crate::index::{SignalHit, SignalKind};
use crate::result::{MatchStrength, SearchMode, SearchResult};

#[derive(Debug)]
struct Accumulator {
    entry_id: String,
    keyword: f64,
    query: f64,
    embedding: Option<f64>,
}

impl Accumulator {
    fn new(entry_id: &str) -> Self {
        Self {
            entry_id: entry_id.to_string(),
            keyword: 0.0,
            query: 0.0,
            embedding: None,
        }
    }

    fn absorb(&mut self, hit: &SignalHit) {
        match hit.kind {
            SignalKind::Keyword => self.keyword = self.keyword.max(hit.score),
            SignalKind::Query => self.query = self.query.max(hit.score),
            SignalKind::Embedding => {
                self.embedding = Some(self.embedding.map_or(hit.score, |e| e.max(hit.score)))
            }
        }
    }
}

/// `query_weight·q + keyword_weight·k` when there is a template match, else `k`.
pub fn blend(query_score: f64, keyword_score: f64, config: &RetrievalConfig) -> f64 {
    if query_score > 0.0 {
        config.query_weight * query_score + config.keyword_weight * keyword_score
    } else {
        keyword_score
    }
}

/// Match-score contribution of an embedding similarity.
pub fn embedding_contribution(similarity: f64, config: &RetrievalConfig) -> f64 {
    config.embedding_base + config.embedding_scale * lore_core::clamp_unit(similarity)
}

/// Merge `hits` into results scored for `mode`, filtered by `min_score`,
/// sorted descending and truncated to `limit`.
pub fn merge(
    hits: &[SignalHit],
    mode: SearchMode,
    min_score: f64,
    limit: usize,
    config: &RetrievalConfig,
) -> Vec<SearchResult> {
    let mut order: Vec<Accumulator> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();
    for hit in hits {
        let slot = *slots.entry(hit.entry_id.as_str()).or_insert_with(|| {
            order.push(Accumulator::new(&hit.entry_id));
            order.len() - 1
        });
        order[slot].absorb(hit);
    }

    let mut results: Vec<SearchResult> = order
        .into_iter()
        .map(|acc| {
            let embedded = acc.embedding.map(|s| embedding_contribution(s, config));
            let raw = match mode {
                SearchMode::Keywords => acc.keyword,
                SearchMode::Queries => acc.query,
                SearchMode::Embeddings => embedded.unwrap_or(0.0),
                SearchMode::Unified => {
                    let base = blend(acc.query, acc.keyword, config);
                    embedded.map_or(base, |e| base.max(e))
                }
            };
            let match_score = lore_core::clamp_unit(raw);
            SearchResult {
                entry_id: acc.entry_id,
                keyword_score: acc.keyword,
                query_score: acc.query,
                embedding_score: acc.embedding,
                match_score,
                match_strength: MatchStrength::classify(match_score, config),
            }
        })
        .filter(|r| r.match_score >= min_score)
        .collect();

    results.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
    results.truncate(limit);
    results
}
