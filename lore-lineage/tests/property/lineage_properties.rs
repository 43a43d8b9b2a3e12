use lore_lineage::{NewLineage, SourceLineageManager, SourceType};
use proptest::prelude::*;

const NODES: usize = 8;

/// A manager with `NODES` full lineages and arbitrary (possibly cyclic) edges.
fn graph(edges: &[(usize, usize)], confidences: &[f64]) -> SourceLineageManager {
    let mut manager = SourceLineageManager::default();
    for (i, confidence) in confidences.iter().enumerate() {
        let lineage = manager.create_lineage(
            NewLineage::new(format!("n{i}"), SourceType::ResearchPaper).confidence(*confidence),
        );
        manager.register_lineage(lineage);
    }
    for (from, to) in edges {
        manager.add_derivation(&format!("n{from}"), &format!("n{to}"), None);
    }
    manager
}

fn arb_graph() -> impl Strategy<Value = (Vec<(usize, usize)>, Vec<f64>)> {
    (
        prop::collection::vec((0..NODES, 0..NODES), 0..30),
        prop::collection::vec(0.0f64..=1.0, NODES),
    )
}

proptest! {
    #[test]
    fn derivation_tree_is_finite_and_unique((edges, confidences) in arb_graph(), start in 0..NODES) {
        let manager = graph(&edges, &confidences);
        let start = format!("n{start}");
        let tree = manager.get_derivation_tree(&start);

        prop_assert!(tree.len() < NODES);
        prop_assert!(!tree.contains(&start));
        let mut sorted = tree.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), tree.len());
    }

    #[test]
    fn propagated_confidence_is_bounded((edges, confidences) in arb_graph(), start in 0..NODES) {
        let manager = graph(&edges, &confidences);
        let confidence = manager.get_propagated_confidence(&format!("n{start}"));
        prop_assert!((0.0..=1.0).contains(&confidence));
        prop_assert!(confidence <= confidences[start] + 1e-12);
    }
}
