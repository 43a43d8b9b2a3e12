/// Retrieval subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("unknown search mode: {mode}")]
    UnknownMode { mode: String },

    #[error("index persistence failed at {path}: {reason}")]
    IndexPersistence { path: String, reason: String },

    #[error("embedding index unavailable: no provider configured")]
    EmbeddingsUnavailable,
}
