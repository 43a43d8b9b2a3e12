use chrono::{Duration, Utc};
use lore_core::config::{DecayConfig, DecayCurve};
use lore_core::Maturity;
use lore_decay::DecayModel;
use proptest::prelude::*;

fn arb_maturity() -> impl Strategy<Value = Maturity> {
    prop_oneof![
        Just(Maturity::Seedling),
        Just(Maturity::Growing),
        Just(Maturity::Evergreen),
    ]
}

fn arb_curve() -> impl Strategy<Value = DecayCurve> {
    prop_oneof![
        Just(DecayCurve::Exponential),
        Just(DecayCurve::Linear),
        Just(DecayCurve::Logarithmic),
    ]
}

fn model_with(curve: DecayCurve) -> DecayModel {
    let mut config = DecayConfig::default();
    for tier in Maturity::ALL {
        config.tiers.get_mut(tier).curve = curve;
    }
    DecayModel::new(config)
}

proptest! {
    #[test]
    fn decay_factor_bounded(
        tier in arb_maturity(),
        curve in arb_curve(),
        offset_days in -100_000i64..100_000,
    ) {
        let model = model_with(curve);
        let now = Utc::now();
        let state = model.calculate_decay_at("kb", tier, now - Duration::days(offset_days), now);
        prop_assert!((0.0..=1.0).contains(&state.decay_factor));
        prop_assert!(state.days_since_validation >= 0.0);
    }

    #[test]
    fn decay_factor_non_increasing_with_age(
        tier in arb_maturity(),
        curve in arb_curve(),
        a in 0i64..5_000,
        b in 0i64..5_000,
    ) {
        let model = model_with(curve);
        let now = Utc::now();
        let (younger, older) = if a <= b { (a, b) } else { (b, a) };
        let f_young = model.calculate_decay_at("kb", tier, now - Duration::days(younger), now).decay_factor;
        let f_old = model.calculate_decay_at("kb", tier, now - Duration::days(older), now).decay_factor;
        prop_assert!(f_old <= f_young + f64::EPSILON);
    }
}
