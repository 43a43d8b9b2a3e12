/// Clamp a score into `[0.0, 1.0]`.
///
/// Upstream producers may hand over values a hair outside the unit range
/// from floating-point error; those are clamped rather than rejected.
/// `NaN` maps to `0.0`.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range() {
        assert_eq!(clamp_unit(1.0000001), 1.0);
        assert_eq!(clamp_unit(-0.2), 0.0);
        assert_eq!(clamp_unit(0.42), 0.42);
    }

    #[test]
    fn nan_is_zero() {
        assert_eq!(clamp_unit(f64::NAN), 0.0);
    }
}
