// ============================================================
// Layer 6 — Collection Store
// ============================================================
// Saves and restores a document collection as JSON.
//
// File format: one JSON array, one object per document:
//
//   [
//     {
//       "document_id": 0,
//       "title": "The Wolf and the Lamb",
//       "raw_text": "WOLF, meeting with ... ",
//       "terms": ["WOLF,", "meeting", ...],
//       "filtered_terms": null,      ← until the filter has run
//       "stemmed_terms": null
//     },
//     ...
//   ]
//
// A missing file on load is NOT an error: we log a warning and
// start from an empty collection. A malformed file is an error.
//
// Reference: Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::{fs, io, path::PathBuf};

use crate::domain::document::Document;
use crate::domain::traits::DocumentSource;

/// Reads and writes one collection file.
pub struct CollectionStore {
    /// Path of the JSON file
    path: PathBuf,
}

impl CollectionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Write the collection, creating parent directories as needed.
    pub fn save(&self, collection: &[Document]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Cannot create directory '{}'", parent.display())
                })?;
            }
        }

        let json = serde_json::to_string(collection)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Cannot write collection to '{}'", self.path.display()))?;

        tracing::info!(
            "Saved {} documents to '{}'",
            collection.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Read the collection; an absent file gives an empty one.
    pub fn load(&self) -> Result<Vec<Document>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(
                    "No collection found at '{}', starting with an empty one",
                    self.path.display()
                );
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Cannot read collection from '{}'", self.path.display())
                });
            }
        };

        let collection: Vec<Document> = serde_json::from_str(&json)
            .with_context(|| format!("Malformed collection file '{}'", self.path.display()))?;

        tracing::debug!("Loaded {} documents from '{}'", collection.len(), self.path.display());
        Ok(collection)
    }

    /// Path of the JSON file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl DocumentSource for CollectionStore {
    fn load_all(&self) -> Result<Vec<Document>> {
        self.load()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_keeps_absent_fields() {
        let dir   = tempfile::tempdir().unwrap();
        let store = CollectionStore::new(dir.path().join("nested/collection.json"));

        let mut filtered = Document::new(1, "Fox", "the fox");
        filtered.filtered_terms = Some(vec!["fox".to_string()]);
        filtered.stemmed_terms  = Some(Vec::new());
        let collection = vec![Document::new(0, "Lamb", "a lamb "), filtered];

        store.save(&collection).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, collection);
        assert!(loaded[0].filtered_terms.is_none());
        assert_eq!(loaded[1].stemmed_terms, Some(Vec::new()));
    }

    #[test]
    fn test_writes_null_for_unset_fields() {
        let dir   = tempfile::tempdir().unwrap();
        let store = CollectionStore::new(dir.path().join("c.json"));
        store.save(&[Document::new(0, "t", "x")]).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert!(raw[0]["filtered_terms"].is_null());
        assert!(raw[0]["stemmed_terms"].is_null());
        assert_eq!(raw[0]["terms"], serde_json::json!(["x"]));
    }

    #[test]
    fn test_missing_file_gives_empty_collection() {
        let dir   = tempfile::tempdir().unwrap();
        let store = CollectionStore::new(dir.path().join("none.json"));
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_file_fails() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not a list").unwrap();
        assert!(CollectionStore::new(path).load().is_err());
    }
}
