//! # lore-runtime
//!
//! Owns one instance of every Lore component behind an explicit
//! [`Corpus`] handle. Callers construct it, pass it around, and drop it;
//! there is no process-wide instance.

pub mod corpus;
pub mod health;
pub mod snapshot;
pub mod tracing_setup;

pub use corpus::Corpus;
pub use health::EntryHealth;
pub use snapshot::{CorpusSnapshot, SnapshotReport};
