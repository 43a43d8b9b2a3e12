use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};
use std::sync::RwLock;

use lore_core::errors::{LoreResult, StoreError};
use lore_core::traits::IDocumentStore;
use walkdir::WalkDir;

const DOCUMENT_EXTENSION: &str = "md";

/// Markdown documents under a root directory; the entry id is the path
/// relative to the root without the `.md` extension, `/`-separated.
pub struct FsDocumentStore {
    root: PathBuf,
}

impl FsDocumentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path for `entry_id`, or `None` if the id would escape the root.
    fn path_for(&self, entry_id: &str) -> Option<PathBuf> {
        let relative = Path::new(entry_id);
        let safe = !entry_id.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        safe.then(|| self.root.join(format!("{entry_id}.{DOCUMENT_EXTENSION}")))
    }
}

impl IDocumentStore for FsDocumentStore {
    fn read(&self, entry_id: &str) -> LoreResult<Option<String>> {
        let Some(path) = self.path_for(entry_id) else {
            return Ok(None);
        };
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::ReadFailed {
                entry_id: entry_id.to_string(),
                reason: e.to_string(),
            }
            .into()),
        }
    }

    fn list(&self) -> LoreResult<Vec<String>> {
        if !self.root.is_dir() {
            return Err(StoreError::ListFailed {
                root: self.root.display().to_string(),
                reason: "not a directory".to_string(),
            }
            .into());
        }

        let mut ids = Vec::new();
        for entry in WalkDir::new(&self.root).follow_links(false) {
            let entry = entry.map_err(|e| StoreError::ListFailed {
                root: self.root.display().to_string(),
                reason: e.to_string(),
            })?;
            let path = entry.path();
            if !entry.file_type().is_file()
                || path.extension().and_then(|e| e.to_str()) != Some(DOCUMENT_EXTENSION)
            {
                continue;
            }
            let Ok(relative) = path.strip_prefix(&self.root) else {
                continue;
            };
            let id = relative
                .with_extension("")
                .components()
                .filter_map(|c| c.as_os_str().to_str())
                .collect::<Vec<_>>()
                .join("/");
            if !id.is_empty() {
                ids.push(id);
            }
        }
        ids.sort();
        Ok(ids)
    }
}

/// In-memory document store, ordered by entry id.
#[derive(Default)]
pub struct MemoryDocumentStore {
    documents: RwLock<BTreeMap<String, String>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, entry_id: impl Into<String>, text: impl Into<String>) {
        if let Ok(mut docs) = self.documents.write() {
            docs.insert(entry_id.into(), text.into());
        }
    }

    pub fn remove(&self, entry_id: &str) -> Option<String> {
        self.documents.write().ok()?.remove(entry_id)
    }
}

impl IDocumentStore for MemoryDocumentStore {
    fn read(&self, entry_id: &str) -> LoreResult<Option<String>> {
        Ok(self
            .documents
            .read()
            .ok()
            .and_then(|docs| docs.get(entry_id).cloned()))
    }

    fn list(&self) -> LoreResult<Vec<String>> {
        Ok(self
            .documents
            .read()
            .map(|docs| docs.keys().cloned().collect())
            .unwrap_or_default())
    }
}
