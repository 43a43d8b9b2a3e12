use super::{ImportError, RetrievalError, StoreError};

/// Top-level error for the Lore engine.
///
/// Reads of unknown entries never produce an error: they resolve to
/// `None` or a neutral default. Only configuration, persistence and
/// provider failures surface here.
#[derive(Debug, thiserror::Error)]
pub enum LoreError {
    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("embedding provider failed: {reason}")]
    EmbeddingFailed { reason: String },

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<serde_json::Error> for LoreError {
    fn from(err: serde_json::Error) -> Self {
        LoreError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for LoreError {
    fn from(err: toml::de::Error) -> Self {
        LoreError::ConfigError(err.to_string())
    }
}
