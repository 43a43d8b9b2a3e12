mod import_error;
mod lore_error;
mod retrieval_error;
mod store_error;

pub use import_error::ImportError;
pub use lore_error::LoreError;
pub use retrieval_error::RetrievalError;
pub use store_error::StoreError;

/// Convenience alias used across the workspace.
pub type LoreResult<T> = Result<T, LoreError>;
