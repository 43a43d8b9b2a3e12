/// Document store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read document {entry_id}: {reason}")]
    ReadFailed { entry_id: String, reason: String },

    #[error("failed to list documents under {root}: {reason}")]
    ListFailed { root: String, reason: String },
}
