use serde::{Deserialize, Serialize};

use super::defaults;
use crate::entry::Maturity;
use crate::errors::{LoreError, LoreResult};

/// Shape of the freshness curve for a maturity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecayCurve {
    /// `0.5^(days / half_life)`.
    Exponential,
    /// `1 - days / (2 * half_life)`, floored at 0.
    Linear,
    /// `1 / (1 + ln(1 + days / half_life))`.
    Logarithmic,
}

/// Decay parameters for one maturity tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierDecay {
    pub half_life_days: f64,
    pub curve: DecayCurve,
}

/// Per-tier decay table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierTable {
    pub seedling: TierDecay,
    pub growing: TierDecay,
    pub evergreen: TierDecay,
}

impl TierTable {
    pub fn get(&self, maturity: Maturity) -> TierDecay {
        match maturity {
            Maturity::Seedling => self.seedling,
            Maturity::Growing => self.growing,
            Maturity::Evergreen => self.evergreen,
        }
    }

    pub fn get_mut(&mut self, maturity: Maturity) -> &mut TierDecay {
        match maturity {
            Maturity::Seedling => &mut self.seedling,
            Maturity::Growing => &mut self.growing,
            Maturity::Evergreen => &mut self.evergreen,
        }
    }
}

impl Default for TierTable {
    fn default() -> Self {
        Self {
            seedling: TierDecay {
                half_life_days: defaults::DEFAULT_SEEDLING_HALF_LIFE_DAYS,
                curve: DecayCurve::Exponential,
            },
            growing: TierDecay {
                half_life_days: defaults::DEFAULT_GROWING_HALF_LIFE_DAYS,
                curve: DecayCurve::Exponential,
            },
            evergreen: TierDecay {
                half_life_days: defaults::DEFAULT_EVERGREEN_HALF_LIFE_DAYS,
                curve: DecayCurve::Logarithmic,
            },
        }
    }
}

/// Decay factor cut-offs for the status buckets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusThresholds {
    /// At or above: fresh.
    pub fresh: f64,
    /// At or above (and below `fresh`): stale.
    pub stale: f64,
    /// At or above (and below `stale`): critical. Below: archived.
    pub critical: f64,
}

impl Default for StatusThresholds {
    fn default() -> Self {
        Self {
            fresh: defaults::DEFAULT_FRESH_THRESHOLD,
            stale: defaults::DEFAULT_STALE_THRESHOLD,
            critical: defaults::DEFAULT_CRITICAL_THRESHOLD,
        }
    }
}

/// Decay subsystem configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    pub tiers: TierTable,
    pub thresholds: StatusThresholds,
}

impl DecayConfig {
    /// Half-lives must be positive and strictly increase with maturity.
    pub fn validate(&self) -> LoreResult<()> {
        let mut previous: Option<(Maturity, f64)> = None;
        for tier in Maturity::ALL {
            let half_life = self.tiers.get(tier).half_life_days;
            if !(half_life.is_finite() && half_life > 0.0) {
                return Err(LoreError::ConfigError(format!(
                    "half-life for {tier} must be positive, got {half_life}"
                )));
            }
            if let Some((prev_tier, prev)) = previous {
                if half_life <= prev {
                    return Err(LoreError::ConfigError(format!(
                        "half-life for {tier} ({half_life}) must exceed {prev_tier} ({prev})"
                    )));
                }
            }
            previous = Some((tier, half_life));
        }

        let t = &self.thresholds;
        if !(t.critical < t.stale && t.stale < t.fresh) {
            return Err(LoreError::ConfigError(format!(
                "status thresholds must satisfy critical < stale < fresh, got {} / {} / {}",
                t.critical, t.stale, t.fresh
            )));
        }
        Ok(())
    }
}
