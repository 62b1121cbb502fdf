// ============================================================
// Layer 2 — ExtractUseCase
// ============================================================
// Turns the fables text file into a persisted collection:
//
//   Step 1: Parse the text file into documents   (Layer 4 - data)
//   Step 2: Save the collection as JSON          (Layer 6 - infra)

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::extractor::FableExtractor;
use crate::domain::traits::DocumentSource;
use crate::infra::collection_store::CollectionStore;

// ─── Extraction Configuration ────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    pub source_path:     String,
    pub collection_path: String,
    pub strip_symbols:   bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            source_path:     "data/aesopa10.txt".to_string(),
            collection_path: "data/collection.json".to_string(),
            strip_symbols:   false,
        }
    }
}

pub struct ExtractUseCase {
    config: ExtractConfig,
}

impl ExtractUseCase {
    pub fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    /// Run extraction and return how many documents were saved
    pub fn execute(&self) -> Result<usize> {
        let cfg = &self.config;

        // ── Step 1: Parse the fables file ─────────────────────────────────────
        tracing::info!("Extracting fables from '{}'", cfg.source_path);
        let extractor  = FableExtractor::new(&cfg.source_path).with_strip_symbols(cfg.strip_symbols);
        let collection = extractor.load_all()?;

        // ── Step 2: Persist ───────────────────────────────────────────────────
        CollectionStore::new(&cfg.collection_path).save(&collection)?;

        Ok(collection.len())
    }
}
