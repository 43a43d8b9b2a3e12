use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use lore_core::config::DecayConfig;
use lore_core::errors::ImportError;
use lore_core::{ImportReport, KnowledgeEntry, Maturity};

use crate::curve;
use crate::status::DecayStatus;

/// Freshness snapshot for one entry, computed on demand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecayState {
    pub entry_id: String,
    pub maturity: Maturity,
    /// Freshness multiplier in `[0.0, 1.0]`.
    pub decay_factor: f64,
    /// Days since last validation, never negative.
    pub days_since_validation: f64,
    pub status: DecayStatus,
}

/// Decay model: per-tier curves plus the record of validation dates.
pub struct DecayModel {
    config: DecayConfig,
    validations: BTreeMap<String, DateTime<Utc>>,
}

impl DecayModel {
    pub fn new(config: DecayConfig) -> Self {
        Self {
            config,
            validations: BTreeMap::new(),
        }
    }

    pub fn config(&self) -> &DecayConfig {
        &self.config
    }

    /// Configured half-life for a tier, in days.
    pub fn half_life(&self, maturity: Maturity) -> f64 {
        self.config.tiers.get(maturity).half_life_days
    }

    /// Bucket a decay factor using the configured thresholds.
    pub fn status_for(&self, decay_factor: f64) -> DecayStatus {
        DecayStatus::classify(decay_factor, &self.config.thresholds)
    }

    /// Compute decay as of now.
    pub fn calculate_decay(
        &self,
        entry_id: &str,
        maturity: Maturity,
        last_validated: DateTime<Utc>,
    ) -> DecayState {
        self.calculate_decay_at(entry_id, maturity, last_validated, Utc::now())
    }

    /// Compute decay as of `now`.
    pub fn calculate_decay_at(
        &self,
        entry_id: &str,
        maturity: Maturity,
        last_validated: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> DecayState {
        let tier = self.config.tiers.get(maturity);
        let days = curve::elapsed_days(last_validated, now);
        let decay_factor = curve::factor(tier.curve, days, tier.half_life_days);

        DecayState {
            entry_id: entry_id.to_string(),
            maturity,
            decay_factor,
            days_since_validation: days.max(0.0),
            status: self.status_for(decay_factor),
        }
    }

    /// Compute decay from the recorded validation date.
    ///
    /// `None` means there is no data for the entry.
    pub fn calculate_decay_for(&self, entry_id: &str, maturity: Maturity) -> Option<DecayState> {
        self.calculate_decay_for_at(entry_id, maturity, Utc::now())
    }

    pub fn calculate_decay_for_at(
        &self,
        entry_id: &str,
        maturity: Maturity,
        now: DateTime<Utc>,
    ) -> Option<DecayState> {
        let last_validated = self.validations.get(entry_id)?;
        Some(self.calculate_decay_at(entry_id, maturity, *last_validated, now))
    }

    /// Record (or overwrite) the validation date, resetting decay to 1.0 as of `when`.
    pub fn validate_entry(&mut self, entry_id: &str, when: DateTime<Utc>) {
        tracing::debug!(entry_id, validated_at = %when.to_rfc3339(), "entry validated");
        self.validations.insert(entry_id.to_string(), when);
    }

    pub fn get_validation_date(&self, entry_id: &str) -> Option<DateTime<Utc>> {
        self.validations.get(entry_id).copied()
    }

    /// Validation date as an RFC 3339 string, or `"unknown"`.
    pub fn validation_date_label(&self, entry_id: &str) -> String {
        self.get_validation_date(entry_id)
            .map(|d| d.to_rfc3339())
            .unwrap_or_else(|| "unknown".to_string())
    }

    /// Entries whose decay factor is below `threshold` as of now.
    pub fn get_stale_entries(&self, entries: &[KnowledgeEntry], threshold: f64) -> Vec<DecayState> {
        self.get_stale_entries_at(entries, threshold, Utc::now())
    }

    /// Entries whose decay factor is below `threshold` as of `now`.
    ///
    /// A validation recorded on the model that is newer than the entry's
    /// own `last_validated` takes precedence.
    pub fn get_stale_entries_at(
        &self,
        entries: &[KnowledgeEntry],
        threshold: f64,
        now: DateTime<Utc>,
    ) -> Vec<DecayState> {
        entries
            .iter()
            .map(|entry| {
                let last_validated = match self.validations.get(&entry.entry_id) {
                    Some(recorded) if *recorded > entry.last_validated => *recorded,
                    _ => entry.last_validated,
                };
                self.calculate_decay_at(&entry.entry_id, entry.maturity, last_validated, now)
            })
            .filter(|state| state.decay_factor < threshold)
            .collect()
    }

    /// Export validation dates as `entry_id → RFC 3339 timestamp`.
    pub fn export_validations(&self) -> BTreeMap<String, String> {
        self.validations
            .iter()
            .map(|(id, when)| (id.clone(), when.to_rfc3339()))
            .collect()
    }

    /// Import validation dates. Unparseable timestamps are skipped.
    pub fn import_validations(&mut self, records: &BTreeMap<String, String>) -> ImportReport {
        let mut report = ImportReport::default();
        for (entry_id, raw) in records {
            match DateTime::parse_from_rfc3339(raw) {
                Ok(when) => {
                    self.validations.insert(entry_id.clone(), when.with_timezone(&Utc));
                    report.record_imported();
                }
                Err(_) => {
                    tracing::warn!(entry_id = %entry_id, value = %raw, "skipping malformed validation date");
                    report.record_skipped(ImportError::InvalidTimestamp {
                        entry_id: entry_id.clone(),
                        value: raw.clone(),
                    });
                }
            }
        }
        report
    }

    /// Number of entries with a recorded validation date.
    pub fn tracked_count(&self) -> usize {
        self.validations.len()
    }
}

impl Default for DecayModel {
    fn default() -> Self {
        Self::new(DecayConfig::default())
    }
}
