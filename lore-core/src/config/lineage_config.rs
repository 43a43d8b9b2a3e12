use serde::{Deserialize, Serialize};

use super::defaults;

/// Lineage manager configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineageConfig {
    /// Importance at or above which full lineage is kept regardless of source type.
    pub full_lineage_importance: f64,
    /// Source types that always get full lineage (snake_case names).
    pub full_lineage_source_types: Vec<String>,
    /// Confidence assigned to the source synthesized when upgrading a simple lineage.
    pub upgraded_source_confidence: f64,
}

impl Default for LineageConfig {
    fn default() -> Self {
        Self {
            full_lineage_importance: defaults::DEFAULT_FULL_LINEAGE_IMPORTANCE,
            full_lineage_source_types: vec!["research_paper".into(), "documentation".into()],
            upgraded_source_confidence: defaults::DEFAULT_UPGRADED_SOURCE_CONFIDENCE,
        }
    }
}
