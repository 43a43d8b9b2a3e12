use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::signal::UsageSignal;

/// One entry in the append-only usage log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageEvent {
    pub entry_id: String,
    pub signal: UsageSignal,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub context: BTreeMap<String, serde_json::Value>,
}

impl UsageEvent {
    pub fn new(entry_id: impl Into<String>, signal: UsageSignal, timestamp: DateTime<Utc>) -> Self {
        Self {
            entry_id: entry_id.into(),
            signal,
            timestamp,
            context: BTreeMap::new(),
        }
    }

    pub fn with_context(mut self, context: BTreeMap<String, serde_json::Value>) -> Self {
        self.context = context;
        self
    }
}
