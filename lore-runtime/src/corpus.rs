use std::sync::Arc;

use chrono::{DateTime, Utc};

use lore_core::config::LoreConfig;
use lore_core::errors::LoreResult;
use lore_core::traits::{IDocumentStore, IEmbeddingProvider};
use lore_core::{KnowledgeEntry, Maturity};
use lore_decay::DecayModel;
use lore_lineage::SourceLineageManager;
use lore_reinforcement::ReinforcementTracker;
use lore_retrieval::CacheLookup;
use lore_usage::UsageTracker;

use crate::health::EntryHealth;
use crate::snapshot::{CorpusSnapshot, RawSnapshot, SnapshotReport};

/// One knowledge corpus: every scoring component plus the lookup over its
/// document store.
///
/// The scoring components never call each other; this handle is where
/// their outputs meet. Mutating calls need `&mut Corpus`, so callers that
/// share a corpus across threads wrap it in a lock of their choosing.
pub struct Corpus {
    pub decay: DecayModel,
    pub usage: UsageTracker,
    pub reinforcement: ReinforcementTracker,
    pub lineage: SourceLineageManager,
    pub lookup: CacheLookup,
    config: LoreConfig,
}

impl Corpus {
    /// Build every component from `config`. Fails only on an invalid config.
    pub fn new(config: LoreConfig, store: Arc<dyn IDocumentStore>) -> LoreResult<Self> {
        config.validate()?;

        let decay = DecayModel::new(config.decay.clone());
        let usage = UsageTracker::new(config.usage.clone());
        let reinforcement = ReinforcementTracker::new(config.reinforcement.clone());
        let lineage = SourceLineageManager::new(config.lineage.clone());
        let lookup = CacheLookup::new(config.retrieval.clone(), store);

        tracing::info!("corpus initialized");
        Ok(Self {
            decay,
            usage,
            reinforcement,
            lineage,
            lookup,
            config,
        })
    }

    /// Build from a TOML config string.
    pub fn from_toml(toml_str: &str, store: Arc<dyn IDocumentStore>) -> LoreResult<Self> {
        Self::new(LoreConfig::from_toml(toml_str)?, store)
    }

    /// Enable the lookup's embedding index.
    pub fn with_embeddings(mut self, provider: Arc<dyn IEmbeddingProvider>) -> Self {
        tracing::info!(provider = provider.name(), "embedding provider attached");
        self.lookup = self.lookup.with_embeddings(provider);
        self
    }

    pub fn config(&self) -> &LoreConfig {
        &self.config
    }

    /// Mark `entry` validated at `when`, on the record and in the decay model.
    pub fn revalidate(&mut self, entry: &mut KnowledgeEntry, when: DateTime<Utc>) {
        entry.revalidate(when);
        self.decay.validate_entry(&entry.entry_id, when);
    }

    /// Decay, usage and confidence for `entry_id` as of `now`.
    ///
    /// Decay comes from the recorded validation date; an entry that was
    /// never validated reports no decay and composes as fresh.
    pub fn entry_health(&self, entry_id: &str, maturity: Maturity, now: DateTime<Utc>) -> EntryHealth {
        let decay = self.decay.calculate_decay_for_at(entry_id, maturity, now);
        let decay_factor = decay.as_ref().map(|d| d.decay_factor);
        let usage_score = self.usage.get_score(entry_id, decay_factor.unwrap_or(1.0));
        let confidence_score = self.reinforcement.confidence_score(entry_id);

        EntryHealth {
            entry_id: entry_id.to_string(),
            decay_factor,
            decay_status: decay.map(|d| d.status),
            composite: EntryHealth::compose(
                decay_factor,
                usage_score.normalized_score,
                confidence_score,
            ),
            usage_score,
            confidence_score,
            lineage_confidence: self.lineage.get_propagated_confidence(entry_id),
        }
    }

    /// Every tracker's state in one snapshot.
    pub fn export_state(&self) -> CorpusSnapshot {
        CorpusSnapshot {
            validations: self.decay.export_validations(),
            events: self.usage.export_events(),
            counters: self.reinforcement.export_counters(),
            lineage: self.lineage.export_lineage(),
        }
    }

    /// Apply a snapshot produced by [`export_state`](Self::export_state).
    pub fn import_state(&mut self, snapshot: &CorpusSnapshot) -> LoreResult<SnapshotReport> {
        let raw = RawSnapshot {
            validations: snapshot.validations.clone(),
            events: to_values(&snapshot.events)?,
            counters: to_values(&snapshot.counters)?,
            lineage: to_values(&snapshot.lineage)?,
        };
        Ok(self.apply(raw))
    }

    /// Apply a JSON snapshot document, skipping malformed records individually.
    ///
    /// Fails only if `json` is not a snapshot-shaped object at all.
    pub fn import_state_json(&mut self, json: &str) -> LoreResult<SnapshotReport> {
        let raw: RawSnapshot = serde_json::from_str(json)?;
        Ok(self.apply(raw))
    }

    pub fn export_state_json(&self) -> LoreResult<String> {
        Ok(serde_json::to_string_pretty(&self.export_state())?)
    }

    fn apply(&mut self, raw: RawSnapshot) -> SnapshotReport {
        let report = SnapshotReport {
            validations: self.decay.import_validations(&raw.validations),
            events: self.usage.import_events(&raw.events),
            counters: self.reinforcement.import_counters(&raw.counters),
            lineage: self.lineage.import_lineage(&raw.lineage),
        };
        let total = report.total();
        tracing::info!(
            imported = total.imported,
            skipped = total.skipped,
            "corpus state imported"
        );
        report
    }
}

fn to_values<T: serde::Serialize>(records: &[T]) -> LoreResult<Vec<serde_json::Value>> {
    records
        .iter()
        .map(|r| serde_json::to_value(r).map_err(Into::into))
        .collect()
}
