use std::collections::{HashMap, HashSet};

use lore_core::errors::LoreResult;
use lore_core::tokenizer;
use serde::{Deserialize, Serialize};

use super::{MatchSource, SignalHit, SignalKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct KeywordEntry {
    entry_id: String,
    keywords: Vec<String>,
}

/// Exact lowercase keyword index scored by Jaccard overlap.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct KeywordIndex {
    entries: Vec<KeywordEntry>,
    #[serde(skip)]
    postings: HashMap<String, Vec<usize>>,
    #[serde(skip)]
    positions: HashMap<String, usize>,
}

impl KeywordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index `entry_id` under the tokens of `keywords`. Re-inserting an id replaces it.
    pub fn insert<S: AsRef<str>>(&mut self, entry_id: &str, keywords: &[S]) {
        let mut seen = HashSet::new();
        let tokens: Vec<String> = keywords
            .iter()
            .flat_map(|k| tokenizer::tokenize(k.as_ref()))
            .filter(|t| seen.insert(t.clone()))
            .collect();

        let idx = match self.positions.get(entry_id) {
            Some(&idx) => {
                for token in &self.entries[idx].keywords {
                    if let Some(posting) = self.postings.get_mut(token) {
                        posting.retain(|&i| i != idx);
                        if posting.is_empty() {
                            self.postings.remove(token);
                        }
                    }
                }
                self.entries[idx].keywords = tokens;
                idx
            }
            None => {
                self.entries.push(KeywordEntry {
                    entry_id: entry_id.to_string(),
                    keywords: tokens,
                });
                let idx = self.entries.len() - 1;
                self.positions.insert(entry_id.to_string(), idx);
                idx
            }
        };
        for token in &self.entries[idx].keywords {
            self.postings.entry(token.clone()).or_default().push(idx);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.postings.clear();
        self.positions.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keywords indexed for `entry_id`.
    pub fn keywords(&self, entry_id: &str) -> Option<&[String]> {
        self.positions
            .get(entry_id)
            .map(|&idx| self.entries[idx].keywords.as_slice())
    }

    /// Restore the token → entry lookups after deserializing.
    pub(crate) fn rebuild_postings(&mut self) {
        self.postings.clear();
        self.positions.clear();
        for (idx, entry) in self.entries.iter().enumerate() {
            self.positions.insert(entry.entry_id.clone(), idx);
            for token in &entry.keywords {
                self.postings.entry(token.clone()).or_default().push(idx);
            }
        }
    }
}

impl MatchSource for KeywordIndex {
    fn kind(&self) -> SignalKind {
        SignalKind::Keyword
    }

    fn search(&self, query: &str) -> LoreResult<Vec<SignalHit>> {
        let query_tokens = tokenizer::token_set(query);
        if query_tokens.is_empty() {
            return Ok(Vec::new());
        }

        let mut candidates: Vec<usize> = query_tokens
            .iter()
            .filter_map(|t| self.postings.get(t))
            .flatten()
            .copied()
            .collect();
        candidates.sort_unstable();
        candidates.dedup();

        Ok(candidates
            .into_iter()
            .map(|idx| {
                let entry = &self.entries[idx];
                let entry_tokens: HashSet<String> = entry.keywords.iter().cloned().collect();
                SignalHit::new(
                    &entry.entry_id,
                    SignalKind::Keyword,
                    tokenizer::jaccard(&query_tokens, &entry_tokens),
                )
            })
            .collect())
    }
}
