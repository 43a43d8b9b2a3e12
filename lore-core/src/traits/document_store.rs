use crate::errors::LoreResult;

/// Read access to the external store holding entry documents.
///
/// Documents are free text with an optional leading metadata block.
pub trait IDocumentStore: Send + Sync {
    /// Raw document text, or `None` when the entry has no backing document.
    fn read(&self, entry_id: &str) -> LoreResult<Option<String>>;

    /// Every entry id the store can currently serve, in a stable order.
    fn list(&self) -> LoreResult<Vec<String>>;
}
