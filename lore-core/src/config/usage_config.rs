use serde::{Deserialize, Serialize};

use super::defaults;

/// Weight contributed to the raw usage score by each signal kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalWeights {
    pub access: f64,
    pub citation: f64,
    pub positive_feedback: f64,
    pub negative_feedback: f64,
    pub correction: f64,
    pub stale_flag: f64,
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            access: defaults::DEFAULT_ACCESS_WEIGHT,
            citation: defaults::DEFAULT_CITATION_WEIGHT,
            positive_feedback: defaults::DEFAULT_POSITIVE_FEEDBACK_WEIGHT,
            negative_feedback: defaults::DEFAULT_NEGATIVE_FEEDBACK_WEIGHT,
            correction: defaults::DEFAULT_CORRECTION_WEIGHT,
            stale_flag: defaults::DEFAULT_STALE_FLAG_WEIGHT,
        }
    }
}

/// Usage tracker configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageConfig {
    pub weights: SignalWeights,
    /// Slope of the logistic squashing applied to the raw score.
    pub steepness: f64,
}

impl Default for UsageConfig {
    fn default() -> Self {
        Self {
            weights: SignalWeights::default(),
            steepness: defaults::DEFAULT_LOGISTIC_STEEPNESS,
        }
    }
}
