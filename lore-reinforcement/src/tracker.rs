use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};

use lore_core::config::ReinforcementConfig;
use lore_core::errors::ImportError;
use lore_core::{clamp_unit, ImportReport};

use crate::counter::{CounterRecord, ReinforcementCounter};
use crate::feedback::Feedback;

/// Owns one counter per entry, created on first write.
pub struct ReinforcementTracker {
    config: ReinforcementConfig,
    counters: HashMap<String, ReinforcementCounter>,
}

impl ReinforcementTracker {
    pub fn new(config: ReinforcementConfig) -> Self {
        Self {
            config,
            counters: HashMap::new(),
        }
    }

    pub fn config(&self) -> &ReinforcementConfig {
        &self.config
    }

    /// Counter for `entry_id`, creating an empty one stamped `now` if absent.
    pub fn get_or_create(&mut self, entry_id: &str, now: DateTime<Utc>) -> &mut ReinforcementCounter {
        self.counters
            .entry(entry_id.to_string())
            .or_insert_with(|| ReinforcementCounter::new(entry_id, now))
    }

    pub fn get_counter(&self, entry_id: &str) -> Option<&ReinforcementCounter> {
        self.counters.get(entry_id)
    }

    /// Record one feedback signal as of now.
    pub fn reinforce(
        &mut self,
        entry_id: &str,
        feedback: Feedback,
        metadata: Option<BTreeMap<String, serde_json::Value>>,
    ) -> &ReinforcementCounter {
        self.reinforce_at(entry_id, feedback, metadata, Utc::now())
    }

    /// Record one feedback signal as of `now`: bump the bucket, merge
    /// metadata (new keys overwrite), and touch `last_accessed`.
    pub fn reinforce_at(
        &mut self,
        entry_id: &str,
        feedback: Feedback,
        metadata: Option<BTreeMap<String, serde_json::Value>>,
        now: DateTime<Utc>,
    ) -> &ReinforcementCounter {
        let counter = self.get_or_create(entry_id, now);
        counter.increment(feedback);
        if let Some(metadata) = metadata {
            counter.metadata.extend(metadata);
        }
        if now > counter.last_accessed {
            counter.last_accessed = now;
        }
        tracing::debug!(
            entry_id,
            feedback = %feedback,
            total = counter.total_signals(),
            "entry reinforced"
        );
        counter
    }

    /// Whether `entry_id`'s counter is flagged for review. Unknown entries are not.
    pub fn needs_review(&self, entry_id: &str) -> bool {
        self.counters
            .get(entry_id)
            .is_some_and(|c| c.needs_review(&self.config))
    }

    /// Reliability of an entry in `[0, 1]`; 0.5 when nothing is known.
    pub fn confidence_score(&self, entry_id: &str) -> f64 {
        self.counters
            .get(entry_id)
            .map_or(0.5, ReinforcementCounter::confidence_score)
    }

    /// Whether `new_id` should reinforce `existing_id` instead of becoming a new entry.
    ///
    /// Requires `similarity` at or above the dedup threshold, and never
    /// reinforces an entry that is flagged for review.
    pub fn should_deduplicate(&self, new_id: &str, existing_id: &str, similarity: f64) -> bool {
        let similarity = clamp_unit(similarity);
        if similarity < self.config.dedup_similarity {
            return false;
        }
        if self.needs_review(existing_id) {
            tracing::debug!(new_id, existing_id, "dedup refused: existing entry flagged for review");
            return false;
        }
        true
    }

    /// Counters flagged for review, highest harm ratio first.
    pub fn get_review_candidates(&self) -> Vec<&ReinforcementCounter> {
        let mut flagged: Vec<&ReinforcementCounter> = self
            .sorted_counters()
            .into_iter()
            .filter(|c| c.needs_review(&self.config))
            .collect();
        flagged.sort_by(|a, b| b.harm_ratio().total_cmp(&a.harm_ratio()));
        flagged
    }

    /// Best-rated counters with enough signals, highest confidence first.
    pub fn get_top_performers(&self, limit: usize) -> Vec<&ReinforcementCounter> {
        let mut ranked: Vec<&ReinforcementCounter> = self
            .sorted_counters()
            .into_iter()
            .filter(|c| c.total_signals() >= self.config.top_performer_min_signals)
            .collect();
        ranked.sort_by(|a, b| b.confidence_score().total_cmp(&a.confidence_score()));
        ranked.truncate(limit);
        ranked
    }

    /// Counters with the most signals first.
    pub fn get_frequently_accessed(&self, limit: usize) -> Vec<&ReinforcementCounter> {
        let mut ranked = self.sorted_counters();
        ranked.sort_by(|a, b| b.total_signals().cmp(&a.total_signals()));
        ranked.truncate(limit);
        ranked
    }

    /// Drop an entry's counter. Returns whether one existed.
    pub fn remove(&mut self, entry_id: &str) -> bool {
        self.counters.remove(entry_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    /// Export every counter with derived fields, ordered by entry id.
    pub fn export_counters(&self) -> Vec<CounterRecord> {
        self.sorted_counters()
            .into_iter()
            .map(|c| c.to_record(&self.config))
            .collect()
    }

    /// Import counter records, replacing any existing counter for the same entry.
    ///
    /// Derived fields in the records are ignored. Records that fail to
    /// deserialize or carry an empty `entry_id` are skipped.
    pub fn import_counters(&mut self, records: &[serde_json::Value]) -> ImportReport {
        let mut report = ImportReport::default();
        for (index, record) in records.iter().enumerate() {
            match serde_json::from_value::<ReinforcementCounter>(record.clone()) {
                Ok(counter) if !counter.entry_id.trim().is_empty() => {
                    self.counters.insert(counter.entry_id.clone(), counter);
                    report.record_imported();
                }
                Ok(_) => {
                    tracing::warn!(index, "skipping counter record with empty entry_id");
                    report.record_skipped(ImportError::MalformedRecord {
                        index,
                        reason: "empty entry_id".to_string(),
                    });
                }
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping malformed counter record");
                    report.record_skipped(ImportError::MalformedRecord {
                        index,
                        reason: e.to_string(),
                    });
                }
            }
        }
        tracing::info!(
            imported = report.imported,
            skipped = report.skipped,
            "reinforcement counters imported"
        );
        report
    }

    /// Counters in entry-id order, so sorts that follow are deterministic on ties.
    fn sorted_counters(&self) -> Vec<&ReinforcementCounter> {
        let mut all: Vec<&ReinforcementCounter> = self.counters.values().collect();
        all.sort_by(|a, b| a.entry_id.cmp(&b.entry_id));
        all
    }
}

impl Default for ReinforcementTracker {
    fn default() -> Self {
        Self::new(ReinforcementConfig::default())
    }
}
