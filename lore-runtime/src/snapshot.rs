use std::collections::BTreeMap;

use lore_core::ImportReport;
use lore_lineage::Lineage;
use lore_reinforcement::CounterRecord;
use lore_usage::UsageEvent;
use serde::{Deserialize, Serialize};

/// Every tracker's export bundled into one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorpusSnapshot {
    /// `entry_id → RFC 3339` last-validated timestamps.
    #[serde(default)]
    pub validations: BTreeMap<String, String>,
    #[serde(default)]
    pub events: Vec<UsageEvent>,
    #[serde(default)]
    pub counters: Vec<CounterRecord>,
    #[serde(default)]
    pub lineage: Vec<Lineage>,
}

/// Loosely typed snapshot, so one bad record does not reject the document.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawSnapshot {
    #[serde(default)]
    pub validations: BTreeMap<String, String>,
    #[serde(default)]
    pub events: Vec<serde_json::Value>,
    #[serde(default)]
    pub counters: Vec<serde_json::Value>,
    #[serde(default)]
    pub lineage: Vec<serde_json::Value>,
}

/// Per-section outcome of a snapshot import.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SnapshotReport {
    pub validations: ImportReport,
    pub events: ImportReport,
    pub counters: ImportReport,
    pub lineage: ImportReport,
}

impl SnapshotReport {
    /// All sections folded into one report.
    pub fn total(&self) -> ImportReport {
        let mut total = ImportReport::default();
        for section in [&self.validations, &self.events, &self.counters, &self.lineage] {
            total.merge(section.clone());
        }
        total
    }
}
