//! # lore-core
//!
//! Foundation crate for the Lore knowledge-retention engine.
//! Defines entry types, traits, errors, config, and the shared tokenizer.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod entry;
pub mod errors;
pub mod import;
pub mod score;
pub mod tokenizer;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::LoreConfig;
pub use entry::{KnowledgeEntry, Maturity};
pub use errors::{LoreError, LoreResult};
pub use import::ImportReport;
pub use score::clamp_unit;
