use chrono::{DateTime, Utc};
use serde::Serialize;

/// Aggregate usage for one entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageScore {
    pub entry_id: String,
    /// Sum of signal weights.
    pub raw_score: f64,
    /// Logistic squashing of `raw_score`, in `[0, 1]`; 0.5 at zero.
    pub normalized_score: f64,
    pub access_count: u64,
    pub citation_count: u64,
    /// Positive minus negative feedback events.
    pub feedback_balance: i64,
    pub last_accessed: Option<DateTime<Utc>>,
    /// Caller-supplied multiplier, carried through untouched (after clamping).
    pub decay_factor: f64,
}

impl UsageScore {
    /// Score for an entry with no events.
    pub fn empty(entry_id: &str, decay_factor: f64) -> Self {
        Self {
            entry_id: entry_id.to_string(),
            raw_score: 0.0,
            normalized_score: 0.5,
            access_count: 0,
            citation_count: 0,
            feedback_balance: 0,
            last_accessed: None,
            decay_factor,
        }
    }

    /// `normalized_score × decay_factor`.
    pub fn weighted(&self) -> f64 {
        self.normalized_score * self.decay_factor
    }
}

/// Logistic function centred at zero: `1 / (1 + e^(-k·x))`.
///
/// Monotonically increasing, bounded to `[0, 1]`.
pub fn logistic(raw: f64, steepness: f64) -> f64 {
    let k = if steepness.is_finite() && steepness > 0.0 {
        steepness
    } else {
        1.0
    };
    let value = 1.0 / (1.0 + (-k * raw).exp());
    lore_core::clamp_unit(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logistic_is_half_at_zero() {
        assert_eq!(logistic(0.0, 1.0), 0.5);
    }

    #[test]
    fn logistic_saturates_without_overflow() {
        assert_eq!(logistic(1e6, 1.0), 1.0);
        assert_eq!(logistic(-1e6, 1.0), 0.0);
    }

    #[test]
    fn non_positive_steepness_falls_back_to_one() {
        assert_eq!(logistic(0.7, 0.0), logistic(0.7, 1.0));
    }
}
