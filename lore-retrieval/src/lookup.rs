use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use lore_core::config::RetrievalConfig;
use lore_core::errors::{LoreResult, RetrievalError};
use lore_core::traits::{IDocumentStore, IEmbeddingProvider};
use serde::{Deserialize, Serialize};

use crate::document::{self, ParsedDocument};
use crate::index::{EmbeddingIndex, KeywordIndex, MatchSource, QueryIndex, SignalHit};
use crate::merge;
use crate::result::{SearchMode, SearchResult};

const KEYWORD_INDEX_FILE: &str = "keyword_index.json";
const QUERY_INDEX_FILE: &str = "query_index.json";

/// Counts from the last index build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Documents the store listed.
    pub documents: usize,
    pub keyword_entries: usize,
    pub query_entries: usize,
    pub embedded_entries: usize,
    /// Documents that were missing or had malformed metadata.
    pub skipped: usize,
}

/// Ranked retrieval over the documents of one store.
pub struct CacheLookup {
    config: RetrievalConfig,
    store: Arc<dyn IDocumentStore>,
    keywords: KeywordIndex,
    queries: QueryIndex,
    embeddings: Option<EmbeddingIndex>,
}

impl CacheLookup {
    pub fn new(config: RetrievalConfig, store: Arc<dyn IDocumentStore>) -> Self {
        let queries = QueryIndex::new(config.query_min_similarity);
        Self {
            config,
            store,
            keywords: KeywordIndex::new(),
            queries,
            embeddings: None,
        }
    }

    /// Enable the embedding index, backed by `provider`.
    pub fn with_embeddings(mut self, provider: Arc<dyn IEmbeddingProvider>) -> Self {
        self.embeddings = Some(EmbeddingIndex::new(
            provider,
            self.config.embedding_min_similarity,
        ));
        self
    }

    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }

    pub fn has_embeddings(&self) -> bool {
        self.embeddings.is_some()
    }

    /// The embedding index, or `EmbeddingsUnavailable` when no provider is attached.
    pub fn embedding_index(&self) -> LoreResult<&EmbeddingIndex> {
        self.embeddings
            .as_ref()
            .ok_or_else(|| RetrievalError::EmbeddingsUnavailable.into())
    }

    pub fn keyword_index(&self) -> &KeywordIndex {
        &self.keywords
    }

    pub fn query_index(&self) -> &QueryIndex {
        &self.queries
    }

    /// Rebuild every index from the documents the store lists.
    ///
    /// Unreadable or malformed documents are skipped. An embedding
    /// provider failure leaves the embedding index empty rather than
    /// failing the build.
    pub fn build_indexes(&mut self) -> LoreResult<IndexStats> {
        let ids = self.store.list()?;
        let mut stats = IndexStats {
            documents: ids.len(),
            ..IndexStats::default()
        };

        self.keywords.clear();
        self.queries.clear();
        let mut embed_items: Vec<(String, String)> = Vec::new();

        for entry_id in &ids {
            let Some(doc) = self.load(entry_id) else {
                stats.skipped += 1;
                continue;
            };

            let mut keywords = document::metadata_strings(&doc.metadata, "keywords");
            keywords.extend(document::metadata_strings(&doc.metadata, "tags"));
            if keywords.is_empty() {
                keywords.extend(doc.title());
            }
            if !keywords.is_empty() {
                self.keywords.insert(entry_id, &keywords);
            }

            let templates = document::metadata_strings(&doc.metadata, "queries");
            if !templates.is_empty() {
                self.queries.insert(entry_id, &templates);
            }

            if self.embeddings.is_some() {
                let text = match doc.title() {
                    Some(title) => format!("{title}\n\n{}", doc.body),
                    None => doc.body.clone(),
                };
                if !text.trim().is_empty() {
                    embed_items.push((entry_id.clone(), text));
                }
            }
        }

        if let Some(index) = self.embeddings.as_mut() {
            index.clear();
            if let Err(e) = index.insert_batch(&embed_items) {
                tracing::warn!(
                    provider = index.provider_name(),
                    error = %e,
                    "embedding index build failed, continuing without embeddings"
                );
                index.clear();
            }
            stats.embedded_entries = index.len();
        }

        stats.keyword_entries = self.keywords.len();
        stats.query_entries = self.queries.len();
        tracing::info!(
            documents = stats.documents,
            keyword_entries = stats.keyword_entries,
            query_entries = stats.query_entries,
            embedded_entries = stats.embedded_entries,
            skipped = stats.skipped,
            "indexes built"
        );
        Ok(stats)
    }

    /// Search with the configured default result limit.
    pub fn search(&self, query: &str, mode: SearchMode, min_score: f64) -> Vec<SearchResult> {
        self.search_with_limit(query, mode, min_score, self.config.default_limit)
    }

    pub fn search_with_limit(
        &self,
        query: &str,
        mode: SearchMode,
        min_score: f64,
        limit: usize,
    ) -> Vec<SearchResult> {
        let mut hits: Vec<SignalHit> = Vec::new();
        if matches!(mode, SearchMode::Keywords | SearchMode::Unified) {
            hits.extend(run_source(&self.keywords, query));
        }
        if matches!(mode, SearchMode::Queries | SearchMode::Unified) {
            hits.extend(run_source(&self.queries, query));
        }
        if matches!(mode, SearchMode::Embeddings | SearchMode::Unified) {
            match self.embedding_index() {
                Ok(index) => hits.extend(run_source(index, query)),
                Err(e) if mode == SearchMode::Embeddings => {
                    tracing::warn!(error = %e, "embedding search degraded to no results");
                }
                Err(_) => {}
            }
        }

        let results = merge::merge(&hits, mode, min_score, limit, &self.config);
        tracing::debug!(%mode, hits = hits.len(), results = results.len(), "search completed");
        results
    }

    /// Body of the entry's document, without its metadata block.
    pub fn get_entry_content(&self, entry_id: &str) -> Option<String> {
        self.load(entry_id).map(|doc| doc.body)
    }

    /// Metadata block of the entry's document.
    pub fn get_entry_metadata(&self, entry_id: &str) -> Option<BTreeMap<String, serde_json::Value>> {
        self.load(entry_id).map(|doc| doc.metadata)
    }

    /// Write the keyword and query indexes as JSON under `dir`.
    pub fn save_indexes(&self, dir: &Path) -> LoreResult<()> {
        fs::create_dir_all(dir).map_err(|e| persistence_error(dir, e))?;
        write_json(&dir.join(KEYWORD_INDEX_FILE), &self.keywords)?;
        write_json(&dir.join(QUERY_INDEX_FILE), &self.queries)?;
        tracing::info!(dir = %dir.display(), "indexes saved");
        Ok(())
    }

    /// Replace the keyword and query indexes with ones saved under `dir`.
    pub fn load_indexes(&mut self, dir: &Path) -> LoreResult<()> {
        let mut keywords: KeywordIndex = read_json(&dir.join(KEYWORD_INDEX_FILE))?;
        let mut queries: QueryIndex = read_json(&dir.join(QUERY_INDEX_FILE))?;
        keywords.rebuild_postings();
        queries.set_min_similarity(self.config.query_min_similarity);

        self.keywords = keywords;
        self.queries = queries;
        tracing::info!(
            dir = %dir.display(),
            keyword_entries = self.keywords.len(),
            query_entries = self.queries.len(),
            "indexes loaded"
        );
        Ok(())
    }

    /// Read and parse a document; `None` when absent, unreadable or malformed.
    fn load(&self, entry_id: &str) -> Option<ParsedDocument> {
        let text = match self.store.read(entry_id) {
            Ok(Some(text)) => text,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(entry_id, error = %e, "document read failed");
                return None;
            }
        };
        match document::parse_document(&text) {
            Ok(doc) => Some(doc),
            Err(e) => {
                tracing::warn!(entry_id, error = %e, "malformed document metadata");
                None
            }
        }
    }
}

fn run_source(source: &dyn MatchSource, query: &str) -> Vec<SignalHit> {
    source.search(query).unwrap_or_else(|e| {
        tracing::warn!(source = ?source.kind(), error = %e, "signal source failed, skipping");
        Vec::new()
    })
}

fn persistence_error(path: &Path, err: impl std::fmt::Display) -> RetrievalError {
    RetrievalError::IndexPersistence {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> LoreResult<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|e| persistence_error(path, e))?;
    Ok(())
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> LoreResult<T> {
    let text = fs::read_to_string(path).map_err(|e| persistence_error(path, e))?;
    serde_json::from_str(&text).map_err(|e| persistence_error(path, e).into())
}
