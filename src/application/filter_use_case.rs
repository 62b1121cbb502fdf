// ============================================================
// Layer 2 — FilterUseCase
// ============================================================
// Removes stop words from a persisted collection:
//
//   Step 1: Load the collection                  (Layer 6 - infra)
//   Step 2: Pick ONE stop-word source            (Layer 4 - data)
//             - packaged list (default)
//             - user-supplied text file
//             - Crouch list derived from this collection
//   Step 3: Fill every document's filtered_terms (Layer 4 - data)
//   Step 4: Save the collection                  (Layer 6 - infra)

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::{
    filter::filter_collection,
    frequency::create_stop_word_list_by_frequency,
    stop_words::{load_stop_word_list, StopWordSet, PACKAGED_STOP_WORDS_PATH},
};
use crate::domain::traits::StopWords;
use crate::infra::collection_store::CollectionStore;

/// Which stop-word list the filter uses. Never more than one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StopWordMode {
    /// The packaged JSON resource
    #[default]
    Packaged,
    /// A plain-text file, one word per line
    UserFile(String),
    /// High- and low-frequency terms of the collection itself
    ByFrequency,
}

// ─── Filter Configuration ────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    pub collection_path:    String,
    /// Where to write the result; None overwrites the input
    pub output_path:        Option<String>,
    pub stopwords_resource: String,
    pub mode:               StopWordMode,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            collection_path:    "data/collection.json".to_string(),
            output_path:        None,
            stopwords_resource: PACKAGED_STOP_WORDS_PATH.to_string(),
            mode:               StopWordMode::Packaged,
        }
    }
}

/// What a filter run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSummary {
    pub documents:    usize,
    pub stop_words:   usize,
    pub terms_before: usize,
    pub terms_after:  usize,
}

pub struct FilterUseCase {
    config: FilterConfig,
}

impl FilterUseCase {
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<FilterSummary> {
        let cfg = &self.config;

        // ── Step 1: Load ──────────────────────────────────────────────────────
        let store          = CollectionStore::new(&cfg.collection_path);
        let mut collection = store.load()?;

        // ── Step 2: Stop-word source ──────────────────────────────────────────
        let stop_words: Box<dyn StopWords> = match &cfg.mode {
            StopWordMode::Packaged => {
                Box::new(StopWordSet::load_packaged(&cfg.stopwords_resource)?)
            }
            StopWordMode::UserFile(path) => {
                Box::new(StopWordSet::from(load_stop_word_list(path)?))
            }
            StopWordMode::ByFrequency => {
                Box::new(create_stop_word_list_by_frequency(&collection))
            }
        };
        let count = stop_words.word_count();
        tracing::info!("Filtering with {} stop words ({:?})", count, cfg.mode);

        // ── Step 3: Filter ────────────────────────────────────────────────────
        filter_collection(&mut collection, &*stop_words);

        let terms_before = collection.iter().map(|d| d.terms.len()).sum();
        let terms_after  = collection
            .iter()
            .map(|d| d.filtered_terms.as_ref().map_or(0, Vec::len))
            .sum();

        // ── Step 4: Save ──────────────────────────────────────────────────────
        let output = cfg.output_path.as_deref().unwrap_or(&cfg.collection_path);
        CollectionStore::new(output).save(&collection)?;

        Ok(FilterSummary {
            documents: collection.len(),
            stop_words: count,
            terms_before,
            terms_after,
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::stop_words::is_not_found;
    use crate::domain::document::Document;
    use std::fs;

    fn seed(dir: &std::path::Path) -> String {
        let path = dir.join("collection.json");
        CollectionStore::new(&path)
            .save(&[Document::new(0, "Fox", "the fox and the grapes")])
            .unwrap();
        path.display().to_string()
    }

    #[test]
    fn test_packaged_mode() {
        let dir      = tempfile::tempdir().unwrap();
        let resource = dir.path().join("stopwords.json");
        fs::write(&resource, r#"["the", "and"]"#).unwrap();

        let collection_path = seed(dir.path());
        let summary = FilterUseCase::new(FilterConfig {
            collection_path:    collection_path.clone(),
            output_path:        None,
            stopwords_resource: resource.display().to_string(),
            mode:               StopWordMode::Packaged,
        })
        .execute()
        .unwrap();

        assert_eq!(summary, FilterSummary { documents: 1, stop_words: 2, terms_before: 5, terms_after: 2 });
        let saved = CollectionStore::new(&collection_path).load().unwrap();
        assert_eq!(saved[0].filtered_terms.clone().unwrap(), vec!["fox", "grapes"]);
    }

    #[test]
    fn test_missing_packaged_resource_keeps_all_terms() {
        let dir = tempfile::tempdir().unwrap();
        let summary = FilterUseCase::new(FilterConfig {
            collection_path:    seed(dir.path()),
            output_path:        None,
            stopwords_resource: dir.path().join("absent.json").display().to_string(),
            mode:               StopWordMode::Packaged,
        })
        .execute()
        .unwrap();

        assert_eq!(summary.stop_words, 0);
        assert_eq!(summary.terms_after, summary.terms_before);
    }

    #[test]
    fn test_missing_user_file_fails() {
        let dir    = tempfile::tempdir().unwrap();
        let absent = dir.path().join("englishST.txt").display().to_string();
        let err = FilterUseCase::new(FilterConfig {
            collection_path: seed(dir.path()),
            mode:            StopWordMode::UserFile(absent),
            ..FilterConfig::default()
        })
        .execute()
        .unwrap_err();

        assert!(is_not_found(&err));
    }

    #[test]
    fn test_by_frequency_writes_to_output() {
        let dir    = tempfile::tempdir().unwrap();
        let output = dir.path().join("filtered.json");
        let input  = seed(dir.path());

        let summary = FilterUseCase::new(FilterConfig {
            collection_path: input.clone(),
            output_path:     Some(output.display().to_string()),
            mode:            StopWordMode::ByFrequency,
            ..FilterConfig::default()
        })
        .execute()
        .unwrap();

        // 4 distinct terms → nothing derived
        assert_eq!(summary.stop_words, 0);
        assert!(CollectionStore::new(&input).load().unwrap()[0].filtered_terms.is_none());
        assert!(CollectionStore::new(&output).load().unwrap()[0].filtered_terms.is_some());
    }
}
