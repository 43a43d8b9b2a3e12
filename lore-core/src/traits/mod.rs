mod document_store;
mod embedding;

pub use document_store::IDocumentStore;
pub use embedding::IEmbeddingProvider;
