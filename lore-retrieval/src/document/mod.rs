//! Reading entry documents from the external store.

mod frontmatter;
mod store;

pub use frontmatter::{metadata_strings, metadata_text, parse_document, FrontmatterError, ParsedDocument};
pub use store::{FsDocumentStore, MemoryDocumentStore};
