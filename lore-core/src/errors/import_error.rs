/// Errors raised for a single record during import.
///
/// Import routines never abort on these: the record is skipped and
/// counted in the returned [`crate::ImportReport`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ImportError {
    #[error("malformed record at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },

    #[error("invalid timestamp for entry {entry_id}: {value}")]
    InvalidTimestamp { entry_id: String, value: String },
}
