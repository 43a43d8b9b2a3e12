use std::fmt;
use std::str::FromStr;

use lore_core::config::SignalWeights;
use serde::{Deserialize, Serialize};

/// Kind of usage observed for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageSignal {
    Access,
    Citation,
    PositiveFeedback,
    NegativeFeedback,
    Correction,
    StaleFlag,
}

impl UsageSignal {
    pub const ALL: [UsageSignal; 6] = [
        UsageSignal::Access,
        UsageSignal::Citation,
        UsageSignal::PositiveFeedback,
        UsageSignal::NegativeFeedback,
        UsageSignal::Correction,
        UsageSignal::StaleFlag,
    ];

    /// Weight of this signal, clamped into `[-1, 1]`.
    pub fn weight(self, weights: &SignalWeights) -> f64 {
        let w = match self {
            UsageSignal::Access => weights.access,
            UsageSignal::Citation => weights.citation,
            UsageSignal::PositiveFeedback => weights.positive_feedback,
            UsageSignal::NegativeFeedback => weights.negative_feedback,
            UsageSignal::Correction => weights.correction,
            UsageSignal::StaleFlag => weights.stale_flag,
        };
        w.clamp(-1.0, 1.0)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UsageSignal::Access => "access",
            UsageSignal::Citation => "citation",
            UsageSignal::PositiveFeedback => "positive_feedback",
            UsageSignal::NegativeFeedback => "negative_feedback",
            UsageSignal::Correction => "correction",
            UsageSignal::StaleFlag => "stale_flag",
        }
    }
}

impl fmt::Display for UsageSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UsageSignal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UsageSignal::ALL
            .into_iter()
            .find(|signal| signal.as_str() == s)
            .ok_or_else(|| format!("unknown usage signal: {s}"))
    }
}
