use std::fmt;

use lore_core::config::StatusThresholds;
use serde::{Deserialize, Serialize};

/// Freshness bucket derived from a decay factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecayStatus {
    Fresh,
    Stale,
    Critical,
    Archived,
}

impl DecayStatus {
    /// Bucket a decay factor against the configured cut-offs.
    pub fn classify(decay_factor: f64, thresholds: &StatusThresholds) -> Self {
        if decay_factor >= thresholds.fresh {
            DecayStatus::Fresh
        } else if decay_factor >= thresholds.stale {
            DecayStatus::Stale
        } else if decay_factor >= thresholds.critical {
            DecayStatus::Critical
        } else {
            DecayStatus::Archived
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DecayStatus::Fresh => "fresh",
            DecayStatus::Stale => "stale",
            DecayStatus::Critical => "critical",
            DecayStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for DecayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
