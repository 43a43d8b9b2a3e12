use lore_core::errors::*;

#[test]
fn malformed_record_carries_index_and_reason() {
    let err = ImportError::MalformedRecord {
        index: 4,
        reason: "missing entry_id".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains('4'));
    assert!(msg.contains("missing entry_id"));
}

// --- From impls ---

#[test]
fn import_error_converts_to_lore_error() {
    let err: LoreError = ImportError::InvalidTimestamp {
        entry_id: "a".into(),
        value: "yesterday".into(),
    }
    .into();
    assert!(matches!(err, LoreError::Import(_)));
    assert!(err.to_string().contains("yesterday"));
}

#[test]
fn retrieval_error_converts_to_lore_error() {
    let err: LoreError = RetrievalError::UnknownMode {
        mode: "fuzzy".into(),
    }
    .into();
    assert!(matches!(err, LoreError::Retrieval(_)));
}

#[test]
fn embeddings_unavailable_names_the_missing_provider() {
    let err: LoreError = RetrievalError::EmbeddingsUnavailable.into();
    assert!(err.to_string().contains("no provider"));
}

#[test]
fn store_error_converts_to_lore_error() {
    let err: LoreError = StoreError::ReadFailed {
        entry_id: "x".into(),
        reason: "permission denied".into(),
    }
    .into();
    assert!(err.to_string().contains("permission denied"));
}

#[test]
fn serde_json_error_converts_to_serialization() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: LoreError = json_err.into();
    assert!(matches!(err, LoreError::Serialization(_)));
}
