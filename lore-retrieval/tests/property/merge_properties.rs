use lore_core::config::RetrievalConfig;
use lore_retrieval::merge::merge;
use lore_retrieval::{MatchStrength, SearchMode, SignalHit, SignalKind};
use proptest::prelude::*;

fn kind() -> impl Strategy<Value = SignalKind> {
    prop_oneof![
        Just(SignalKind::Keyword),
        Just(SignalKind::Query),
        Just(SignalKind::Embedding),
    ]
}

fn mode() -> impl Strategy<Value = SearchMode> {
    prop_oneof![
        Just(SearchMode::Keywords),
        Just(SearchMode::Queries),
        Just(SearchMode::Embeddings),
        Just(SearchMode::Unified),
    ]
}

fn hits() -> impl Strategy<Value = Vec<SignalHit>> {
    prop::collection::vec((0usize..6, kind(), -0.5f64..1.5), 0..40).prop_map(|raw| {
        raw.into_iter()
            .map(|(id, kind, score)| SignalHit::new(format!("e{id}"), kind, score))
            .collect()
    })
}

proptest! {
    #[test]
    fn match_scores_are_bounded_and_sorted(hits in hits(), mode in mode(), min in 0.0f64..1.0) {
        let config = RetrievalConfig::default();
        let results = merge(&hits, mode, min, usize::MAX, &config);

        for pair in results.windows(2) {
            prop_assert!(pair[0].match_score >= pair[1].match_score);
        }
        for r in &results {
            prop_assert!((0.0..=1.0).contains(&r.match_score));
            prop_assert!(r.match_score >= min);
            prop_assert_eq!(r.match_strength, MatchStrength::classify(r.match_score, &config));
        }
    }

    #[test]
    fn each_entry_appears_once(hits in hits(), mode in mode()) {
        let config = RetrievalConfig::default();
        let results = merge(&hits, mode, 0.0, usize::MAX, &config);
        let mut ids: Vec<&str> = results.iter().map(|r| r.entry_id.as_str()).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), total);
    }
}
