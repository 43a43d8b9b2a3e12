use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a piece of knowledge came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    WebArticle,
    Documentation,
    ResearchPaper,
    CodeExample,
    UserInput,
    Derived,
}

impl SourceType {
    pub const ALL: [SourceType; 6] = [
        SourceType::WebArticle,
        SourceType::Documentation,
        SourceType::ResearchPaper,
        SourceType::CodeExample,
        SourceType::UserInput,
        SourceType::Derived,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SourceType::WebArticle => "web_article",
            SourceType::Documentation => "documentation",
            SourceType::ResearchPaper => "research_paper",
            SourceType::CodeExample => "code_example",
            SourceType::UserInput => "user_input",
            SourceType::Derived => "derived",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SourceType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown source type: {s}"))
    }
}

/// A primary source backing a fully-tracked entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceReference {
    pub source_id: String,
    pub source_type: SourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub retrieved_at: DateTime<Utc>,
    /// Trust in the source, in `[0, 1]`.
    pub confidence: f64,
}

impl SourceReference {
    /// New reference with a generated id; `confidence` is clamped to `[0, 1]`.
    pub fn new(source_type: SourceType, retrieved_at: DateTime<Utc>, confidence: f64) -> Self {
        Self {
            source_id: format!("src-{}", uuid::Uuid::new_v4()),
            source_type,
            url: None,
            title: None,
            author: None,
            retrieved_at,
            confidence: lore_core::clamp_unit(confidence),
        }
    }
}
