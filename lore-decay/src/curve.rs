use lore_core::config::DecayCurve;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Fractional days between two instants. Negative when `to` precedes `from`.
pub fn elapsed_days(from: chrono::DateTime<chrono::Utc>, to: chrono::DateTime<chrono::Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / 1000.0 / SECONDS_PER_DAY
}

/// Freshness factor for `days` elapsed under the given curve.
///
/// Always in `[0.0, 1.0]`: negative elapsed time (a validation date in the
/// future) reads as fully fresh, and very large elapsed time bottoms out
/// at 0.0.
pub fn factor(curve: DecayCurve, days: f64, half_life_days: f64) -> f64 {
    if days.is_nan() || days <= 0.0 {
        return 1.0;
    }
    if half_life_days <= 0.0 {
        return 0.0;
    }

    let ratio = days / half_life_days;
    let raw = match curve {
        DecayCurve::Exponential => 0.5_f64.powf(ratio),
        DecayCurve::Linear => 1.0 - ratio / 2.0,
        DecayCurve::Logarithmic => 1.0 / (1.0 + ratio.ln_1p()),
    };

    // Clamp to [0.0, 1.0]; linear goes negative past two half-lives.
    if raw.is_finite() {
        raw.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
