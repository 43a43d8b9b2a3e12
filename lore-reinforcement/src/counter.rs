use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lore_core::config::ReinforcementConfig;

use crate::feedback::Feedback;

/// Feedback counts for one entry.
///
/// Counts are unsigned, so the non-negativity invariant holds by type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReinforcementCounter {
    pub entry_id: String,
    #[serde(default)]
    pub helpful: u64,
    #[serde(default)]
    pub harmful: u64,
    #[serde(default)]
    pub neutral: u64,
    pub first_seen: DateTime<Utc>,
    pub last_accessed: DateTime<Utc>,
    #[serde(default)]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl ReinforcementCounter {
    pub fn new(entry_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            entry_id: entry_id.into(),
            helpful: 0,
            harmful: 0,
            neutral: 0,
            first_seen: now,
            last_accessed: now,
            metadata: BTreeMap::new(),
        }
    }

    pub(crate) fn increment(&mut self, feedback: Feedback) {
        let bucket = match feedback {
            Feedback::Helpful => &mut self.helpful,
            Feedback::Harmful => &mut self.harmful,
            Feedback::Neutral => &mut self.neutral,
        };
        *bucket = bucket.saturating_add(1);
    }

    /// Saturates at `u64::MAX`; imported counts can be arbitrarily large.
    pub fn total_signals(&self) -> u64 {
        self.helpful
            .saturating_add(self.harmful)
            .saturating_add(self.neutral)
    }

    /// `helpful / total`, or 0.5 with no signals.
    pub fn helpfulness_ratio(&self) -> f64 {
        match self.total_signals() {
            0 => 0.5,
            total => lore_core::clamp_unit(self.helpful as f64 / total as f64),
        }
    }

    /// `harmful / total`, or 0.0 with no signals.
    pub fn harm_ratio(&self) -> f64 {
        match self.total_signals() {
            0 => 0.0,
            total => lore_core::clamp_unit(self.harmful as f64 / total as f64),
        }
    }

    /// Net sentiment `(helpful − harmful) / total` mapped from `[-1, 1]` onto `[0, 1]`.
    ///
    /// 0.5 with no signals.
    pub fn confidence_score(&self) -> f64 {
        match self.total_signals() {
            0 => 0.5,
            total => {
                let net = (self.helpful as f64 - self.harmful as f64) / total as f64;
                lore_core::clamp_unit((net + 1.0) / 2.0)
            }
        }
    }

    /// `helpful − harmful`, saturated into `i64`.
    pub fn feedback_balance(&self) -> i64 {
        let balance = i128::from(self.helpful) - i128::from(self.harmful);
        balance.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
    }

    /// Flagged when harm is high, or when plenty of signals show low helpfulness.
    pub fn needs_review(&self, config: &ReinforcementConfig) -> bool {
        self.harm_ratio() > config.review_harm_ratio
            || (self.total_signals() > config.review_min_signals
                && self.helpfulness_ratio() < config.review_min_helpfulness)
    }

    /// Export form with the derived fields denormalized alongside the counts.
    pub fn to_record(&self, config: &ReinforcementConfig) -> CounterRecord {
        CounterRecord {
            counter: self.clone(),
            total_signals: self.total_signals(),
            helpfulness_ratio: self.helpfulness_ratio(),
            harm_ratio: self.harm_ratio(),
            confidence_score: self.confidence_score(),
            needs_review: self.needs_review(config),
        }
    }
}

/// Exported counter. The derived fields are informational; import
/// recomputes them from the counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterRecord {
    #[serde(flatten)]
    pub counter: ReinforcementCounter,
    pub total_signals: u64,
    pub helpfulness_ratio: f64,
    pub harm_ratio: f64,
    pub confidence_score: f64,
    pub needs_review: bool,
}
