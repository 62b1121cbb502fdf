// ============================================================
// Layer 2 — DeriveUseCase
// ============================================================
// Computes the Crouch stop-word list of a persisted collection
// and optionally writes it as a plain-text list, so it can be
// fed back in later with `filter --stopword-file`.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::{
    frequency::create_stop_word_list_by_frequency,
    stop_words::save_stop_word_list,
};
use crate::infra::collection_store::CollectionStore;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeriveConfig {
    pub collection_path: String,
    pub output_path:     Option<String>,
}

impl Default for DeriveConfig {
    fn default() -> Self {
        Self {
            collection_path: "data/collection.json".to_string(),
            output_path:     None,
        }
    }
}

pub struct DeriveUseCase {
    config: DeriveConfig,
}

impl DeriveUseCase {
    pub fn new(config: DeriveConfig) -> Self {
        Self { config }
    }

    /// Return the derived list, high-frequency terms first
    pub fn execute(&self) -> Result<Vec<String>> {
        let cfg        = &self.config;
        let collection = CollectionStore::new(&cfg.collection_path).load()?;
        let stop_words = create_stop_word_list_by_frequency(&collection);

        tracing::info!(
            "Derived {} stop words from {} documents",
            stop_words.len(),
            collection.len()
        );

        if let Some(path) = &cfg.output_path {
            save_stop_word_list(&stop_words, path)?;
        }

        Ok(stop_words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::stop_words::load_stop_word_list;
    use crate::domain::document::Document;

    #[test]
    fn test_derive_and_save() {
        let dir        = tempfile::tempdir().unwrap();
        let collection = dir.path().join("collection.json");
        let output     = dir.path().join("derived.txt");
        CollectionStore::new(&collection)
            .save(&[
                Document::new(0, "one", "a a b c d e"),
                Document::new(1, "two", "a f g h i j"),
            ])
            .unwrap();

        let words = DeriveUseCase::new(DeriveConfig {
            collection_path: collection.display().to_string(),
            output_path:     Some(output.display().to_string()),
        })
        .execute()
        .unwrap();

        assert_eq!(words, vec!["a", "j"]);
        assert_eq!(load_stop_word_list(&output).unwrap(), words);
    }

    #[test]
    fn test_missing_collection_derives_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let words = DeriveUseCase::new(DeriveConfig {
            collection_path: dir.path().join("none.json").display().to_string(),
            output_path:     None,
        })
        .execute()
        .unwrap();
        assert!(words.is_empty());
    }
}
