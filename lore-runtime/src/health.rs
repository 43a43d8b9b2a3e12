use lore_decay::DecayStatus;
use lore_usage::UsageScore;
use serde::Serialize;

/// Combined retention signals for one entry at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryHealth {
    pub entry_id: String,
    /// `None` when the entry has never been validated.
    pub decay_factor: Option<f64>,
    pub decay_status: Option<DecayStatus>,
    pub usage_score: UsageScore,
    /// Reinforcement confidence; 0.5 without feedback.
    pub confidence_score: f64,
    /// Source confidence propagated through the derivation chain.
    pub lineage_confidence: f64,
    /// `decay × usage normalized × confidence`, with missing decay counted as 1.0.
    pub composite: f64,
}

impl EntryHealth {
    pub fn compose(decay_factor: Option<f64>, usage_normalized: f64, confidence: f64) -> f64 {
        lore_core::clamp_unit(
            decay_factor.unwrap_or(1.0)
                * lore_core::clamp_unit(usage_normalized)
                * lore_core::clamp_unit(confidence),
        )
    }
}
