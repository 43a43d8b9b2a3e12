//! # lore-lineage
//!
//! Provenance for knowledge entries. Important entries keep a full
//! lineage (primary source, derivation edges, transformations, validation
//! chain); everything else keeps a simple source record. Derivation edges
//! are walked with explicit visited sets, so cyclic graphs still terminate.

pub mod lineage;
pub mod manager;
pub mod source;
pub mod traversal;

pub use lineage::{FullLineage, Lineage, LineageKind, NewLineage, SimpleLineage, ValidationRecord};
pub use manager::SourceLineageManager;
pub use source::{SourceReference, SourceType};
