//! # lore-retrieval
//!
//! The lookup side of the corpus. Independent signal producers each score
//! entries against a query; the merge step folds their hits per entry into
//! one match score, buckets it into a match strength, and ranks.
//!
//! ## Architecture
//!
//! ```text
//! CacheLookup
//! ├── KeywordIndex    (Jaccard over exact lowercase tokens)
//! ├── QueryIndex      (similarity against pre-indexed query templates)
//! ├── EmbeddingIndex  (cosine via IEmbeddingProvider, optional)
//! ├── merge           (per-entry max, weighted blend, classification)
//! └── document        (frontmatter parsing, filesystem / in-memory stores)
//! ```

pub mod document;
pub mod index;
pub mod lookup;
pub mod merge;
pub mod result;

pub use document::{FsDocumentStore, MemoryDocumentStore, ParsedDocument};
pub use index::{EmbeddingIndex, KeywordIndex, MatchSource, QueryIndex, SignalHit, SignalKind};
pub use lookup::{CacheLookup, IndexStats};
pub use result::{MatchStrength, SearchMode, SearchResult};
