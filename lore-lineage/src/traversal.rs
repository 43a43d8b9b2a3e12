//! Walks over `derived_from` edges.
//!
//! Edges are expected to be acyclic but nothing enforces that on insert,
//! so every walk threads an explicit visited set.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::lineage::Lineage;

/// All ancestors of `entry_id`, breadth-first, each listed once, excluding the start.
///
/// Parents without a registered lineage are listed but not expanded.
pub fn derivation_tree(lineages: &HashMap<String, Lineage>, entry_id: &str) -> Vec<String> {
    let mut visited: HashSet<&str> = HashSet::new();
    visited.insert(entry_id);

    let mut ancestors = Vec::new();
    let mut queue: VecDeque<&str> = VecDeque::new();
    queue.push_back(entry_id);

    while let Some(current) = queue.pop_front() {
        let Some(lineage) = lineages.get(current) else {
            continue;
        };
        for parent in lineage.derived_from() {
            if visited.insert(parent.as_str()) {
                ancestors.push(parent.clone());
                queue.push_back(parent.as_str());
            }
        }
    }

    ancestors
}

/// Source confidence multiplied down the derivation chain.
///
/// Simple lineage and unknown entries contribute 1.0. An entry that is
/// already on the current path contributes 1.0 instead of recursing.
/// Finished entries are memoized, so shared ancestors are walked once.
pub fn propagated_confidence(lineages: &HashMap<String, Lineage>, entry_id: &str) -> f64 {
    let mut walk = ConfidenceWalk {
        lineages,
        on_path: HashSet::new(),
        finished: HashMap::new(),
        cycle_seen: false,
    };
    let confidence = walk.visit(entry_id);
    if walk.cycle_seen {
        tracing::warn!(entry_id, "derivation cycle encountered during confidence propagation");
    }
    confidence
}

struct ConfidenceWalk<'a> {
    lineages: &'a HashMap<String, Lineage>,
    on_path: HashSet<&'a str>,
    finished: HashMap<&'a str, f64>,
    cycle_seen: bool,
}

impl<'a> ConfidenceWalk<'a> {
    fn visit(&mut self, entry_id: &str) -> f64 {
        let lineages = self.lineages;
        let Some((key, lineage)) = lineages.get_key_value(entry_id) else {
            return 1.0;
        };
        let full = match lineage {
            Lineage::Full(full) => full,
            Lineage::Simple(_) => return 1.0,
        };
        if let Some(&done) = self.finished.get(key.as_str()) {
            return done;
        }
        if !self.on_path.insert(key.as_str()) {
            self.cycle_seen = true;
            return 1.0;
        }

        let mut confidence = lore_core::clamp_unit(full.primary_source.confidence);
        for parent in &full.derived_from {
            confidence *= self.visit(parent);
        }

        self.on_path.remove(key.as_str());
        self.finished.insert(key.as_str(), confidence);
        confidence
    }
}

/// Entries listing `entry_id` as a direct parent, sorted.
pub fn derived_entries(lineages: &HashMap<String, Lineage>, entry_id: &str) -> Vec<String> {
    let mut children: Vec<String> = lineages
        .values()
        .filter(|l| l.derived_from().iter().any(|d| d == entry_id))
        .map(|l| l.entry_id().to_string())
        .collect();
    children.sort();
    children
}
