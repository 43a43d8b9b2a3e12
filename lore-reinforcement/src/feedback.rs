use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Feedback bucket for a reinforcement signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    Helpful,
    Harmful,
    Neutral,
}

impl Feedback {
    pub fn as_str(self) -> &'static str {
        match self {
            Feedback::Helpful => "helpful",
            Feedback::Harmful => "harmful",
            Feedback::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "helpful" => Ok(Feedback::Helpful),
            "harmful" => Ok(Feedback::Harmful),
            "neutral" => Ok(Feedback::Neutral),
            other => Err(format!("unknown feedback: {other}")),
        }
    }
}
