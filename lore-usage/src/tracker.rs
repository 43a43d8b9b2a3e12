use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};

use lore_core::config::UsageConfig;
use lore_core::errors::ImportError;
use lore_core::{clamp_unit, ImportReport};

use crate::event::UsageEvent;
use crate::score::{self, UsageScore};
use crate::signal::UsageSignal;

/// Append-only usage log keyed by entry id.
///
/// Events are never edited in place; the only removals are
/// [`clear_events`](Self::clear_events) and [`clear_all`](Self::clear_all).
pub struct UsageTracker {
    config: UsageConfig,
    events: HashMap<String, Vec<UsageEvent>>,
}

impl UsageTracker {
    pub fn new(config: UsageConfig) -> Self {
        Self {
            config,
            events: HashMap::new(),
        }
    }

    pub fn config(&self) -> &UsageConfig {
        &self.config
    }

    /// Append an event timestamped now.
    pub fn record_event(
        &mut self,
        entry_id: &str,
        signal: UsageSignal,
        context: BTreeMap<String, serde_json::Value>,
    ) -> UsageEvent {
        self.record_event_at(entry_id, signal, context, Utc::now())
    }

    /// Append an event with an explicit timestamp.
    pub fn record_event_at(
        &mut self,
        entry_id: &str,
        signal: UsageSignal,
        context: BTreeMap<String, serde_json::Value>,
        timestamp: DateTime<Utc>,
    ) -> UsageEvent {
        let event = UsageEvent::new(entry_id, signal, timestamp).with_context(context);
        tracing::debug!(entry_id, signal = %signal, "usage event recorded");
        self.events
            .entry(entry_id.to_string())
            .or_default()
            .push(event.clone());
        event
    }

    /// Fold every event for `entry_id` into a score.
    ///
    /// `decay_factor` is an external multiplier carried through for the
    /// caller's combined score; it is clamped to `[0, 1]` but not computed
    /// here. Unknown entries yield the neutral empty score.
    pub fn get_score(&self, entry_id: &str, decay_factor: f64) -> UsageScore {
        let decay_factor = clamp_unit(decay_factor);
        let Some(events) = self.events.get(entry_id).filter(|e| !e.is_empty()) else {
            return UsageScore::empty(entry_id, decay_factor);
        };

        let mut raw_score = 0.0;
        let mut access_count = 0;
        let mut citation_count = 0;
        let mut feedback_balance = 0i64;
        let mut last_accessed: Option<DateTime<Utc>> = None;

        for event in events {
            raw_score += event.signal.weight(&self.config.weights);
            match event.signal {
                UsageSignal::Access => access_count += 1,
                UsageSignal::Citation => citation_count += 1,
                UsageSignal::PositiveFeedback => feedback_balance += 1,
                UsageSignal::NegativeFeedback => feedback_balance -= 1,
                UsageSignal::Correction | UsageSignal::StaleFlag => {}
            }
            last_accessed = Some(match last_accessed {
                Some(prev) if prev >= event.timestamp => prev,
                _ => event.timestamp,
            });
        }

        UsageScore {
            entry_id: entry_id.to_string(),
            raw_score,
            normalized_score: score::logistic(raw_score, self.config.steepness),
            access_count,
            citation_count,
            feedback_balance,
            last_accessed,
            decay_factor,
        }
    }

    /// Scores for every tracked entry, highest normalized score first.
    pub fn get_all_scores(&self, decay_factor: f64) -> Vec<UsageScore> {
        let mut scores: Vec<UsageScore> = self
            .tracked_entries()
            .iter()
            .map(|id| self.get_score(id, decay_factor))
            .collect();
        scores.sort_by(|a, b| b.normalized_score.total_cmp(&a.normalized_score));
        scores
    }

    /// Events for `entry_id` in chronological order, optionally only those at or after `since`.
    pub fn get_events(&self, entry_id: &str, since: Option<DateTime<Utc>>) -> Vec<UsageEvent> {
        let mut events: Vec<UsageEvent> = self
            .events
            .get(entry_id)
            .map(|log| {
                log.iter()
                    .filter(|e| since.map_or(true, |s| e.timestamp >= s))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        events.sort_by_key(|e| e.timestamp);
        events
    }

    /// Purge the log for one entry. Returns the number of events removed.
    pub fn clear_events(&mut self, entry_id: &str) -> usize {
        let removed = self.events.remove(entry_id).map_or(0, |log| log.len());
        if removed > 0 {
            tracing::debug!(entry_id, removed, "usage events cleared");
        }
        removed
    }

    /// Purge every log.
    pub fn clear_all(&mut self) {
        self.events.clear();
    }

    /// Entry ids with at least one event, sorted.
    pub fn tracked_entries(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .events
            .iter()
            .filter(|(_, log)| !log.is_empty())
            .map(|(id, _)| id.clone())
            .collect();
        ids.sort();
        ids
    }

    /// Total events across all entries.
    pub fn event_count(&self) -> usize {
        self.events.values().map(Vec::len).sum()
    }

    /// Export the full log, grouped by entry id then chronologically.
    pub fn export_events(&self) -> Vec<UsageEvent> {
        self.tracked_entries()
            .iter()
            .flat_map(|id| self.get_events(id, None))
            .collect()
    }

    /// Import plain event records.
    ///
    /// Records that fail to deserialize or carry an empty `entry_id` are
    /// skipped. Identical events are matched by multiplicity: the n-th copy
    /// of an event in the batch is appended only if the log holds fewer
    /// than n copies, so re-importing an export is a no-op while repeated
    /// events recorded at the same instant all survive a first import.
    pub fn import_events(&mut self, records: &[serde_json::Value]) -> ImportReport {
        let mut report = ImportReport::default();
        let mut batch_counts: HashMap<String, usize> = HashMap::new();
        for (index, record) in records.iter().enumerate() {
            let event: UsageEvent = match serde_json::from_value(record.clone()) {
                Ok(event) => event,
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping malformed usage record");
                    report.record_skipped(ImportError::MalformedRecord {
                        index,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };
            if event.entry_id.trim().is_empty() {
                tracing::warn!(index, "skipping usage record with empty entry_id");
                report.record_skipped(ImportError::MalformedRecord {
                    index,
                    reason: "empty entry_id".to_string(),
                });
                continue;
            }

            let occurrence = batch_counts.entry(event_key(&event)).or_insert(0);
            *occurrence += 1;
            let log = self.events.entry(event.entry_id.clone()).or_default();
            if log.iter().filter(|e| **e == event).count() < *occurrence {
                log.push(event);
            }
            report.record_imported();
        }
        tracing::info!(
            imported = report.imported,
            skipped = report.skipped,
            "usage events imported"
        );
        report
    }
}

/// Identity of an event for multiplicity matching during import.
fn event_key(event: &UsageEvent) -> String {
    let mut key = format!(
        "{}\u{0}{}\u{0}{}",
        event.entry_id,
        event.signal,
        event.timestamp.to_rfc3339_opts(chrono::SecondsFormat::Nanos, true)
    );
    for (k, v) in &event.context {
        key.push('\u{0}');
        key.push_str(k);
        key.push('=');
        key.push_str(&v.to_string());
    }
    key
}

impl Default for UsageTracker {
    fn default() -> Self {
        Self::new(UsageConfig::default())
    }
}
