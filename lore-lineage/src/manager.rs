use std::collections::HashMap;

use chrono::{DateTime, Utc};

use lore_core::config::LineageConfig;
use lore_core::errors::ImportError;
use lore_core::ImportReport;

use crate::lineage::{FullLineage, Lineage, LineageKind, NewLineage, SimpleLineage, ValidationRecord};
use crate::source::{SourceReference, SourceType};
use crate::traversal;

/// Registry of lineage records keyed by entry id.
pub struct SourceLineageManager {
    config: LineageConfig,
    lineages: HashMap<String, Lineage>,
}

impl SourceLineageManager {
    pub fn new(config: LineageConfig) -> Self {
        Self {
            config,
            lineages: HashMap::new(),
        }
    }

    pub fn config(&self) -> &LineageConfig {
        &self.config
    }

    /// Full lineage for authoritative source types or important entries.
    pub fn should_use_full_lineage(&self, source_type: SourceType, importance_score: f64) -> bool {
        self.config
            .full_lineage_source_types
            .iter()
            .any(|t| t == source_type.as_str())
            || importance_score >= self.config.full_lineage_importance
    }

    /// Build the lineage variant `request` calls for. Does not register it.
    pub fn create_lineage(&self, request: NewLineage) -> Lineage {
        if self.should_use_full_lineage(request.source_type, request.importance) {
            let mut source =
                SourceReference::new(request.source_type, request.retrieved_at, request.confidence);
            source.url = request.url;
            source.title = request.title;
            source.author = request.author;
            Lineage::Full(FullLineage {
                entry_id: request.entry_id,
                primary_source: source,
                derived_from: Vec::new(),
                transformations: Vec::new(),
                validation_chain: Vec::new(),
                importance: lore_core::clamp_unit(request.importance),
            })
        } else {
            Lineage::Simple(SimpleLineage {
                entry_id: request.entry_id,
                source_type: request.source_type,
                source_url: request.url,
                retrieved_at: request.retrieved_at,
            })
        }
    }

    /// Register (or replace) the lineage for its entry.
    pub fn register_lineage(&mut self, lineage: Lineage) {
        tracing::debug!(entry_id = lineage.entry_id(), kind = %lineage.kind(), "lineage registered");
        self.lineages.insert(lineage.entry_id().to_string(), lineage);
    }

    pub fn get_lineage(&self, entry_id: &str) -> Option<&Lineage> {
        self.lineages.get(entry_id)
    }

    pub fn get_lineage_type(&self, entry_id: &str) -> Option<LineageKind> {
        self.lineages.get(entry_id).map(Lineage::kind)
    }

    pub fn remove_lineage(&mut self, entry_id: &str) -> Option<Lineage> {
        self.lineages.remove(entry_id)
    }

    pub fn len(&self) -> usize {
        self.lineages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lineages.is_empty()
    }

    /// Record that `entry_id` was derived from `derived_from`.
    ///
    /// Only full lineage tracks derivations; returns whether anything was recorded.
    pub fn add_derivation(
        &mut self,
        entry_id: &str,
        derived_from: &str,
        transformation: Option<&str>,
    ) -> bool {
        match self.lineages.get_mut(entry_id) {
            Some(Lineage::Full(full)) => {
                full.add_derivation(derived_from, transformation);
                tracing::debug!(entry_id, derived_from, "derivation added");
                true
            }
            Some(Lineage::Simple(_)) | None => false,
        }
    }

    /// Append a validation record dated now.
    pub fn add_validation(
        &mut self,
        entry_id: &str,
        validator: &str,
        status: &str,
        notes: Option<&str>,
    ) -> bool {
        self.add_validation_at(entry_id, validator, status, notes, Utc::now())
    }

    /// Append a validation record dated `date`. No-op on simple lineage.
    pub fn add_validation_at(
        &mut self,
        entry_id: &str,
        validator: &str,
        status: &str,
        notes: Option<&str>,
        date: DateTime<Utc>,
    ) -> bool {
        match self.lineages.get_mut(entry_id) {
            Some(Lineage::Full(full)) => {
                full.validation_chain.push(ValidationRecord {
                    validator: validator.to_string(),
                    date,
                    status: status.to_string(),
                    notes: notes.map(str::to_string),
                });
                true
            }
            Some(Lineage::Simple(_)) | None => false,
        }
    }

    /// Promote a simple lineage to full, synthesizing its primary source.
    ///
    /// Returns false if the entry is unknown or already full.
    pub fn upgrade_to_full_lineage(&mut self, entry_id: &str, new_importance: Option<f64>) -> bool {
        let Some(Lineage::Simple(simple)) = self.lineages.get(entry_id) else {
            return false;
        };

        let mut source = SourceReference::new(
            simple.source_type,
            simple.retrieved_at,
            self.config.upgraded_source_confidence,
        );
        source.url = simple.source_url.clone();

        let importance = new_importance.unwrap_or(self.config.full_lineage_importance);
        let upgraded = Lineage::Full(FullLineage {
            entry_id: simple.entry_id.clone(),
            primary_source: source,
            derived_from: Vec::new(),
            transformations: Vec::new(),
            validation_chain: Vec::new(),
            importance: lore_core::clamp_unit(importance),
        });

        tracing::info!(entry_id, "lineage upgraded to full");
        self.lineages.insert(entry_id.to_string(), upgraded);
        true
    }

    /// Entries whose source URL matches `url` exactly, sorted.
    pub fn get_entries_by_source_url(&self, url: &str) -> Vec<String> {
        let mut ids: Vec<String> = self
            .lineages
            .values()
            .filter(|l| l.source_url() == Some(url))
            .map(|l| l.entry_id().to_string())
            .collect();
        ids.sort();
        ids
    }

    /// Every ancestor of `entry_id`, deduplicated, excluding the entry itself.
    pub fn get_derivation_tree(&self, entry_id: &str) -> Vec<String> {
        traversal::derivation_tree(&self.lineages, entry_id)
    }

    /// Entries directly derived from `entry_id`.
    pub fn get_derived_entries(&self, entry_id: &str) -> Vec<String> {
        traversal::derived_entries(&self.lineages, entry_id)
    }

    /// Confidence of `entry_id` after multiplying through its derivation chain.
    pub fn get_propagated_confidence(&self, entry_id: &str) -> f64 {
        traversal::propagated_confidence(&self.lineages, entry_id)
    }

    /// Every lineage record, ordered by entry id.
    pub fn export_lineage(&self) -> Vec<Lineage> {
        let mut all: Vec<Lineage> = self.lineages.values().cloned().collect();
        all.sort_by(|a, b| a.entry_id().cmp(b.entry_id()));
        all
    }

    /// Register lineage records, replacing existing ones for the same entry.
    ///
    /// Records with an unknown discriminator, missing fields, or an empty
    /// `entry_id` are skipped.
    pub fn import_lineage(&mut self, records: &[serde_json::Value]) -> ImportReport {
        let mut report = ImportReport::default();
        for (index, record) in records.iter().enumerate() {
            match serde_json::from_value::<Lineage>(record.clone()) {
                Ok(lineage) if !lineage.entry_id().trim().is_empty() => {
                    self.lineages.insert(lineage.entry_id().to_string(), lineage);
                    report.record_imported();
                }
                Ok(_) => {
                    tracing::warn!(index, "skipping lineage record with empty entry_id");
                    report.record_skipped(ImportError::MalformedRecord {
                        index,
                        reason: "empty entry_id".to_string(),
                    });
                }
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping malformed lineage record");
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
            "lineage imported"
        );
        report
    }
}

impl Default for SourceLineageManager {
    fn default() -> Self {
        Self::new(LineageConfig::default())
    }
}
