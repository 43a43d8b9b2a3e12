use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::source::{SourceReference, SourceType};

/// One step in an entry's validation history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationRecord {
    pub validator: String,
    pub date: DateTime<Utc>,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Provenance for an important entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullLineage {
    pub entry_id: String,
    pub primary_source: SourceReference,
    /// Parent entries, unique, in insertion order.
    #[serde(default)]
    pub derived_from: Vec<String>,
    /// Transformations applied on the way here, unique.
    #[serde(default)]
    pub transformations: Vec<String>,
    #[serde(default)]
    pub validation_chain: Vec<ValidationRecord>,
    /// Importance score the entry was registered with.
    #[serde(default)]
    pub importance: f64,
}

impl FullLineage {
    /// Append a parent and transformation, ignoring ones already present.
    pub fn add_derivation(&mut self, derived_from: &str, transformation: Option<&str>) {
        if !self.derived_from.iter().any(|d| d == derived_from) {
            self.derived_from.push(derived_from.to_string());
        }
        if let Some(t) = transformation {
            if !self.transformations.iter().any(|x| x == t) {
                self.transformations.push(t.to_string());
            }
        }
    }
}

/// Lightweight provenance for ordinary entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleLineage {
    pub entry_id: String,
    pub source_type: SourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    pub retrieved_at: DateTime<Utc>,
}

/// Exactly one lineage record per entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "lineage_type", rename_all = "snake_case")]
pub enum Lineage {
    Full(FullLineage),
    Simple(SimpleLineage),
}

impl Lineage {
    pub fn entry_id(&self) -> &str {
        match self {
            Lineage::Full(full) => &full.entry_id,
            Lineage::Simple(simple) => &simple.entry_id,
        }
    }

    pub fn kind(&self) -> LineageKind {
        match self {
            Lineage::Full(_) => LineageKind::Full,
            Lineage::Simple(_) => LineageKind::Simple,
        }
    }

    pub fn source_type(&self) -> SourceType {
        match self {
            Lineage::Full(full) => full.primary_source.source_type,
            Lineage::Simple(simple) => simple.source_type,
        }
    }

    pub fn source_url(&self) -> Option<&str> {
        match self {
            Lineage::Full(full) => full.primary_source.url.as_deref(),
            Lineage::Simple(simple) => simple.source_url.as_deref(),
        }
    }

    /// Parent entries; always empty for simple lineage.
    pub fn derived_from(&self) -> &[String] {
        match self {
            Lineage::Full(full) => &full.derived_from,
            Lineage::Simple(_) => &[],
        }
    }
}

/// Discriminator of a [`Lineage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineageKind {
    Full,
    Simple,
}

impl fmt::Display for LineageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LineageKind::Full => "full",
            LineageKind::Simple => "simple",
        })
    }
}

/// Inputs for [`crate::SourceLineageManager::create_lineage`].
#[derive(Debug, Clone)]
pub struct NewLineage {
    pub entry_id: String,
    pub source_type: SourceType,
    pub url: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub confidence: f64,
    pub importance: f64,
    pub retrieved_at: DateTime<Utc>,
}

impl NewLineage {
    /// Defaults: full confidence, zero importance, retrieved now.
    pub fn new(entry_id: impl Into<String>, source_type: SourceType) -> Self {
        Self {
            entry_id: entry_id.into(),
            source_type,
            url: None,
            title: None,
            author: None,
            confidence: 1.0,
            importance: 0.0,
            retrieved_at: Utc::now(),
        }
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn importance(mut self, importance: f64) -> Self {
        self.importance = importance;
        self
    }

    pub fn retrieved_at(mut self, retrieved_at: DateTime<Utc>) -> Self {
        self.retrieved_at = retrieved_at;
        self
    }
}
