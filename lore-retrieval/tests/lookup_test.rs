use std::sync::Arc;

use lore_core::config::RetrievalConfig;
use lore_core::errors::{LoreError, LoreResult};
use lore_core::traits::IEmbeddingProvider;
use lore_retrieval::{CacheLookup, MatchStrength, MemoryDocumentStore, SearchMode};

const ERRORS_DOC: &str = "---
title: Error handling
keywords: [error, handling]
tags: rust, result
queries:
  - error handling
  - how do I propagate errors
---

Use `?` to propagate errors.
";

const IO_DOC: &str = "---
title: File IO
keywords: [io, files, error]
queries: [reading files]
---
Reading files can fail with an error.
";

fn corpus() -> Arc<MemoryDocumentStore> {
    let store = MemoryDocumentStore::new();
    store.insert("errors", ERRORS_DOC);
    store.insert("io", IO_DOC);
    store.insert("broken", "---\ntitle: never closed\n");
    store.insert("plain", "just body text");
    Arc::new(store)
}

fn built(store: Arc<MemoryDocumentStore>) -> CacheLookup {
    let mut lookup = CacheLookup::new(RetrievalConfig::default(), store);
    lookup.build_indexes().unwrap();
    lookup
}

/// Two fixed dimensions: mentions of "error" and of "file".
struct TopicEmbedder;

impl IEmbeddingProvider for TopicEmbedder {
    fn embed(&self, text: &str) -> LoreResult<Vec<f32>> {
        let text = text.to_lowercase();
        let dim = |needle: &str| if text.contains(needle) { 1.0 } else { 0.0 };
        Ok(vec![dim("error"), dim("file")])
    }

    fn name(&self) -> &str {
        "topic"
    }
}

struct FailingEmbedder;

impl IEmbeddingProvider for FailingEmbedder {
    fn embed(&self, _text: &str) -> LoreResult<Vec<f32>> {
        Err(LoreError::EmbeddingFailed {
            reason: "offline".to_string(),
        })
    }

    fn name(&self) -> &str {
        "failing"
    }
}

// ── Index build ──────────────────────────────────────────────────────────

#[test]
fn build_indexes_counts_and_skips_malformed_documents() {
    let mut lookup = CacheLookup::new(RetrievalConfig::default(), corpus());
    let stats = lookup.build_indexes().unwrap();
    assert_eq!(stats.documents, 4);
    assert_eq!(stats.skipped, 1);
    assert_eq!(stats.keyword_entries, 2);
    assert_eq!(stats.query_entries, 2);
    assert_eq!(stats.embedded_entries, 0);
    assert_eq!(
        lookup.keyword_index().keywords("errors").unwrap(),
        &["error", "handling", "rust", "result"]
    );
}

#[test]
fn title_is_the_keyword_fallback() {
    let store = MemoryDocumentStore::new();
    store.insert("t", "---\ntitle: Borrow Checker\n---\nbody");
    let lookup = built(Arc::new(store));
    assert_eq!(
        lookup.keyword_index().keywords("t").unwrap(),
        &["borrow", "checker"]
    );
}

#[test]
fn rebuild_drops_removed_documents() {
    let store = corpus();
    let mut lookup = built(store.clone());
    store.remove("io");
    lookup.build_indexes().unwrap();
    assert!(lookup.keyword_index().keywords("io").is_none());
}

// ── Search ───────────────────────────────────────────────────────────────

#[test]
fn unified_search_blends_query_and_keyword_scores() {
    let lookup = built(corpus());
    let results = lookup.search("error handling", SearchMode::Unified, 0.0);

    assert_eq!(results.len(), 2);
    let top = &results[0];
    assert_eq!(top.entry_id, "errors");
    assert!((top.keyword_score - 0.5).abs() < 1e-9);
    assert!((top.query_score - 1.0).abs() < 1e-9);
    assert!((top.match_score - 0.85).abs() < 1e-9);
    assert_eq!(top.match_strength, MatchStrength::Strong);
    assert_eq!(top.embedding_score, None);

    let io = &results[1];
    assert_eq!(io.entry_id, "io");
    assert_eq!(io.query_score, 0.0);
    assert!((io.match_score - 0.25).abs() < 1e-9);
    assert_eq!(io.match_strength, MatchStrength::Weak);
}

#[test]
fn min_score_filters_results() {
    let lookup = built(corpus());
    let results = lookup.search("error handling", SearchMode::Unified, 0.3);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].entry_id, "errors");
}

#[test]
fn keywords_mode_ignores_templates() {
    let lookup = built(corpus());
    let results = lookup.search("error handling", SearchMode::Keywords, 0.0);
    assert!((results[0].match_score - 0.5).abs() < 1e-9);
    assert_eq!(results[0].query_score, 0.0);
}

#[test]
fn queries_mode_ignores_keywords() {
    let lookup = built(corpus());
    let results = lookup.search("How do I propagate errors?", SearchMode::Queries, 0.0);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].entry_id, "errors");
    assert_eq!(results[0].keyword_score, 0.0);
    assert!(results[0].match_score > 0.9);
}

#[test]
fn limit_truncates_after_sorting() {
    let lookup = built(corpus());
    let results = lookup.search_with_limit("error handling", SearchMode::Unified, 0.0, 1);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].entry_id, "errors");
}

#[test]
fn empty_query_and_empty_index_return_nothing() {
    let lookup = built(corpus());
    assert!(lookup.search("   ", SearchMode::Unified, 0.0).is_empty());

    let empty = CacheLookup::new(RetrievalConfig::default(), Arc::new(MemoryDocumentStore::new()));
    assert!(empty.search("error", SearchMode::Unified, 0.0).is_empty());
}

#[test]
fn embeddings_mode_without_provider_is_empty() {
    let lookup = built(corpus());
    assert!(!lookup.has_embeddings());
    assert!(matches!(
        lookup.embedding_index(),
        Err(LoreError::Retrieval(lore_core::errors::RetrievalError::EmbeddingsUnavailable))
    ));
    assert!(lookup.search("error", SearchMode::Embeddings, 0.0).is_empty());
}

// ── Embeddings ───────────────────────────────────────────────────────────

#[test]
fn embedding_hits_map_similarity_into_contribution() {
    let mut lookup =
        CacheLookup::new(RetrievalConfig::default(), corpus()).with_embeddings(Arc::new(TopicEmbedder));
    let stats = lookup.build_indexes().unwrap();
    assert_eq!(stats.embedded_entries, 3);

    let results = lookup.search("error", SearchMode::Embeddings, 0.0);
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].entry_id, "errors");
    assert!((results[0].match_score - 1.0).abs() < 1e-6);
    assert_eq!(results[1].entry_id, "io");
    let sim = results[1].embedding_score.unwrap();
    assert!((sim - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-6);
    assert!((results[1].match_score - (0.6 + 0.4 * sim)).abs() < 1e-9);
}

#[test]
fn unified_takes_the_stronger_of_blend_and_embedding() {
    let mut lookup =
        CacheLookup::new(RetrievalConfig::default(), corpus()).with_embeddings(Arc::new(TopicEmbedder));
    lookup.build_indexes().unwrap();

    let results = lookup.search("error handling", SearchMode::Unified, 0.0);
    let io = results.iter().find(|r| r.entry_id == "io").unwrap();
    assert!(io.match_score > 0.25);
    assert!((io.match_score - (0.6 + 0.4 * io.embedding_score.unwrap())).abs() < 1e-9);
}

#[test]
fn provider_failure_degrades_to_no_embeddings() {
    let mut lookup = CacheLookup::new(RetrievalConfig::default(), corpus())
        .with_embeddings(Arc::new(FailingEmbedder));
    let stats = lookup.build_indexes().unwrap();
    assert_eq!(stats.embedded_entries, 0);
    assert_eq!(stats.keyword_entries, 2);
    assert!(!lookup.search("error handling", SearchMode::Unified, 0.0).is_empty());
}

// ── Document access ──────────────────────────────────────────────────────

#[test]
fn entry_content_and_metadata_read_through_the_store() {
    let lookup = built(corpus());
    assert_eq!(
        lookup.get_entry_content("errors").as_deref(),
        Some("Use `?` to propagate errors.\n")
    );
    let metadata = lookup.get_entry_metadata("errors").unwrap();
    assert_eq!(metadata["title"], serde_json::json!("Error handling"));

    assert_eq!(lookup.get_entry_content("plain").as_deref(), Some("just body text"));
    assert!(lookup.get_entry_metadata("plain").unwrap().is_empty());
}

#[test]
fn missing_or_malformed_documents_are_not_found() {
    let lookup = built(corpus());
    assert!(lookup.get_entry_content("missing").is_none());
    assert!(lookup.get_entry_metadata("missing").is_none());
    assert!(lookup.get_entry_content("broken").is_none());
    assert!(lookup.get_entry_metadata("broken").is_none());
}

// ── Persistence ──────────────────────────────────────────────────────────

#[test]
fn saved_indexes_reload_into_a_fresh_lookup() {
    let lookup = built(corpus());
    let dir = tempfile::tempdir().unwrap();
    lookup.save_indexes(dir.path()).unwrap();

    let mut restored =
        CacheLookup::new(RetrievalConfig::default(), Arc::new(MemoryDocumentStore::new()));
    restored.load_indexes(dir.path()).unwrap();

    for mode in [SearchMode::Keywords, SearchMode::Queries, SearchMode::Unified] {
        assert_eq!(
            restored.search("error handling", mode, 0.0),
            lookup.search("error handling", mode, 0.0),
            "mode {mode}"
        );
    }
}

#[test]
fn loading_from_an_empty_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut lookup = CacheLookup::new(RetrievalConfig::default(), corpus());
    let err = lookup.load_indexes(dir.path()).unwrap_err();
    assert!(matches!(
        err,
        LoreError::Retrieval(lore_core::errors::RetrievalError::IndexPersistence { .. })
    ));
}
