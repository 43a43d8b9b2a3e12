mod decay_config;
pub mod defaults;
mod lineage_config;
mod reinforcement_config;
mod retrieval_config;
mod usage_config;

use std::path::Path;

pub use decay_config::{DecayConfig, DecayCurve, StatusThresholds, TierDecay, TierTable};
pub use lineage_config::LineageConfig;
pub use reinforcement_config::ReinforcementConfig;
pub use retrieval_config::RetrievalConfig;
pub use usage_config::{SignalWeights, UsageConfig};

use serde::{Deserialize, Serialize};

use crate::errors::{LoreError, LoreResult};

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoreConfig {
    pub decay: DecayConfig,
    pub usage: UsageConfig,
    pub reinforcement: ReinforcementConfig,
    pub lineage: LineageConfig,
    pub retrieval: RetrievalConfig,
}

impl LoreConfig {
    /// Parse a TOML string. Missing sections and fields take their defaults.
    pub fn from_toml(input: &str) -> LoreResult<Self> {
        let config: LoreConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and parse a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> LoreResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| LoreError::ConfigError(format!("{}: {e}", path.display())))?;
        Self::from_toml(&raw)
    }

    /// Check cross-field invariants that serde cannot express.
    pub fn validate(&self) -> LoreResult<()> {
        self.decay.validate()
    }
}
