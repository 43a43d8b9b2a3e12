use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Expected lifespan class of a knowledge entry.
///
/// Drives the half-life and curve used by the decay model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Maturity {
    Seedling,
    Growing,
    Evergreen,
}

impl Maturity {
    /// All tiers, shortest-lived first.
    pub const ALL: [Maturity; 3] = [Maturity::Seedling, Maturity::Growing, Maturity::Evergreen];

    pub fn as_str(self) -> &'static str {
        match self {
            Maturity::Seedling => "seedling",
            Maturity::Growing => "growing",
            Maturity::Evergreen => "evergreen",
        }
    }
}

impl fmt::Display for Maturity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Maturity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "seedling" => Ok(Maturity::Seedling),
            "growing" => Ok(Maturity::Growing),
            "evergreen" => Ok(Maturity::Evergreen),
            other => Err(format!("unknown maturity tier: {other}")),
        }
    }
}
