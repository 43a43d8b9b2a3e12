use lore_core::errors::LoreResult;
use serde::{Deserialize, Serialize};

use super::{MatchSource, SignalHit, SignalKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct QueryEntry {
    entry_id: String,
    templates: Vec<String>,
}

/// Pre-indexed query templates per entry.
///
/// An entry's score is its best template's similarity to the query:
/// Sørensen–Dice over character bigrams of the normalized text.
#[derive(Debug, Serialize, Deserialize)]
pub struct QueryIndex {
    entries: Vec<QueryEntry>,
    min_similarity: f64,
}

impl QueryIndex {
    pub fn new(min_similarity: f64) -> Self {
        Self {
            entries: Vec::new(),
            min_similarity: lore_core::clamp_unit(min_similarity),
        }
    }

    /// Index `templates` for `entry_id`. Re-inserting an id replaces it.
    pub fn insert<S: AsRef<str>>(&mut self, entry_id: &str, templates: &[S]) {
        let templates: Vec<String> = templates
            .iter()
            .map(|t| normalize(t.as_ref()))
            .filter(|t| !t.is_empty())
            .collect();
        let entry = QueryEntry {
            entry_id: entry_id.to_string(),
            templates,
        };
        match self.entries.iter().position(|e| e.entry_id == entry_id) {
            Some(pos) => self.entries[pos] = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn set_min_similarity(&mut self, min_similarity: f64) {
        self.min_similarity = lore_core::clamp_unit(min_similarity);
    }
}

impl Default for QueryIndex {
    fn default() -> Self {
        Self::new(lore_core::config::defaults::DEFAULT_QUERY_MIN_SIMILARITY)
    }
}

impl MatchSource for QueryIndex {
    fn kind(&self) -> SignalKind {
        SignalKind::Query
    }

    fn search(&self, query: &str) -> LoreResult<Vec<SignalHit>> {
        let query = normalize(query);
        if query.is_empty() {
            return Ok(Vec::new());
        }

        Ok(self
            .entries
            .iter()
            .filter_map(|entry| {
                let best = entry
                    .templates
                    .iter()
                    .map(|t| strsim::sorensen_dice(&query, t))
                    .fold(0.0_f64, f64::max);
                (best > 0.0 && best >= self.min_similarity)
                    .then(|| SignalHit::new(&entry.entry_id, SignalKind::Query, best))
            })
            .collect())
    }
}

/// Lowercase and collapse whitespace.
fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_template_scores_one() {
        let mut index = QueryIndex::new(0.3);
        index.insert("e", &["How do I handle errors?"]);
        let hits = index.search("how do i  handle ERRORS?").unwrap();
        assert_eq!(hits.len(), 1);
        assert!((hits[0].score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn best_template_wins() {
        let mut index = QueryIndex::new(0.0);
        index.insert("e", &["unrelated words", "error handling in rust"]);
        let hits = index.search("error handling").unwrap();
        assert!(hits[0].score > 0.5);
    }

    #[test]
    fn weak_similarity_is_dropped() {
        let mut index = QueryIndex::new(0.3);
        index.insert("e", &["configure the database pool"]);
        assert!(index.search("zebra").unwrap().is_empty());
    }
}
