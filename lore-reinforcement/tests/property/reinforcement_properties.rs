use chrono::{TimeZone, Utc};
use lore_reinforcement::{Feedback, ReinforcementTracker};
use proptest::prelude::*;

fn arb_feedback() -> impl Strategy<Value = Feedback> {
    prop_oneof![
        Just(Feedback::Helpful),
        Just(Feedback::Harmful),
        Just(Feedback::Neutral),
    ]
}

proptest! {
    #[test]
    fn derived_ratios_stay_in_unit_range(signals in prop::collection::vec(arb_feedback(), 0..60)) {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let mut tracker = ReinforcementTracker::default();
        for feedback in &signals {
            tracker.reinforce_at("e", *feedback, None, now);
        }

        let confidence = tracker.confidence_score("e");
        prop_assert!((0.0..=1.0).contains(&confidence));

        if let Some(counter) = tracker.get_counter("e") {
            prop_assert_eq!(counter.total_signals(), signals.len() as u64);
            prop_assert_eq!(counter.helpful + counter.harmful + counter.neutral, counter.total_signals());
            prop_assert!((0.0..=1.0).contains(&counter.helpfulness_ratio()));
            prop_assert!((0.0..=1.0).contains(&counter.harm_ratio()));
            prop_assert_eq!(counter.feedback_balance(), counter.helpful as i64 - counter.harmful as i64);
        } else {
            prop_assert!(signals.is_empty());
        }
    }

    #[test]
    fn flagged_entries_never_deduplicate(harmful in 1u64..20, helpful in 0u64..3, similarity in -1.0f64..2.0) {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let mut tracker = ReinforcementTracker::default();
        for _ in 0..harmful {
            tracker.reinforce_at("existing", Feedback::Harmful, None, now);
        }
        for _ in 0..helpful {
            tracker.reinforce_at("existing", Feedback::Helpful, None, now);
        }
        if tracker.needs_review("existing") {
            prop_assert!(!tracker.should_deduplicate("new", "existing", similarity));
        }
    }
}
