mod maturity;

pub use maturity::Maturity;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A curated knowledge snippet as seen by the retention engine.
///
/// The corpus store owns the record; the engine only reads it. The one
/// mutation is revalidation, which moves `last_validated` forward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub entry_id: String,
    pub maturity: Maturity,
    pub created_at: DateTime<Utc>,
    pub last_validated: DateTime<Utc>,
}

impl KnowledgeEntry {
    /// Create an entry that was validated at creation time.
    pub fn new(entry_id: impl Into<String>, maturity: Maturity, created_at: DateTime<Utc>) -> Self {
        Self {
            entry_id: entry_id.into(),
            maturity,
            created_at,
            last_validated: created_at,
        }
    }

    /// Record a revalidation at `when`.
    pub fn revalidate(&mut self, when: DateTime<Utc>) {
        self.last_validated = when;
    }
}
