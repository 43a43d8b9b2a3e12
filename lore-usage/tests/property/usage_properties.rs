use std::collections::BTreeMap;

use lore_usage::{UsageSignal, UsageTracker};
use proptest::prelude::*;

fn arb_signal() -> impl Strategy<Value = UsageSignal> {
    prop_oneof![
        Just(UsageSignal::Access),
        Just(UsageSignal::Citation),
        Just(UsageSignal::PositiveFeedback),
        Just(UsageSignal::NegativeFeedback),
        Just(UsageSignal::Correction),
        Just(UsageSignal::StaleFlag),
    ]
}

proptest! {
    #[test]
    fn normalized_score_bounded(signals in prop::collection::vec(arb_signal(), 0..200)) {
        let mut tracker = UsageTracker::default();
        for signal in &signals {
            tracker.record_event("kb", *signal, BTreeMap::new());
        }
        let score = tracker.get_score("kb", 1.0);
        prop_assert!((0.0..=1.0).contains(&score.normalized_score));
    }

    #[test]
    fn positive_signal_never_lowers_score(
        signals in prop::collection::vec(arb_signal(), 0..50),
        extra in prop_oneof![
            Just(UsageSignal::Access),
            Just(UsageSignal::Citation),
            Just(UsageSignal::PositiveFeedback),
            Just(UsageSignal::Correction),
        ],
    ) {
        let mut tracker = UsageTracker::default();
        for signal in &signals {
            tracker.record_event("kb", *signal, BTreeMap::new());
        }
        let before = tracker.get_score("kb", 1.0).normalized_score;
        tracker.record_event("kb", extra, BTreeMap::new());
        let after = tracker.get_score("kb", 1.0).normalized_score;
        prop_assert!(after >= before);
    }
}
