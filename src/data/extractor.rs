// ============================================================
// Layer 4 — Fable Extractor
// ============================================================
// Splits the fixed-format fables text file into documents.
//
// Layout of the source file:
//
//   ...preamble...
//   Aesop's Fables          ← everything up to here is skipped
//   ...
//   <blank>
//   <blank>
//   <blank>
//   The Wolf and the Lamb   ← title (i + 3)
//   <blank>
//   <blank>
//   WOLF, meeting with...   ← body starts (i + 6)
//   ...                     ← body runs until the next blank line
//   <blank>
//
// A document starts wherever three blank lines are followed by a
// non-blank one. Each body line is trimmed and followed by a
// single space in `raw_text`. Ids count up from 0.
//
// Reference: Rust Book §8 (Strings), §13 (Iterators)

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::data::normalizer::remove_symbols;
use crate::domain::document::Document;
use crate::domain::traits::DocumentSource;

/// Header line that ends the preamble
const COLLECTION_HEADER: &str = "Aesop's Fables";

/// Extracts fables from a single text file.
/// Implements the DocumentSource trait from Layer 3.
pub struct FableExtractor {
    /// Path to the fables text file
    source: PathBuf,
    /// Run remove_symbols on the body before splitting into terms
    strip_symbols: bool,
}

impl FableExtractor {
    /// Create an extractor for the given file.
    /// Terms are plain whitespace tokens unless symbol stripping is enabled.
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self { source: source.into(), strip_symbols: false }
    }

    /// Normalise possessives and punctuation before tokenising
    pub fn with_strip_symbols(mut self, strip_symbols: bool) -> Self {
        self.strip_symbols = strip_symbols;
        self
    }

    /// Parse already-read file contents.
    pub fn extract(&self, text: &str) -> Vec<Document> {
        let lines: Vec<&str> = text
            .lines()
            .skip_while(|line| line.trim() != COLLECTION_HEADER)
            .skip(1)
            .collect();

        let blank = |i: usize| lines[i].trim().is_empty();

        let mut collection = Vec::new();
        let mut i = 0usize;

        while i < lines.len() {
            let starts_document = blank(i)
                && i + 3 < lines.len()
                && blank(i + 1)
                && blank(i + 2)
                && !blank(i + 3);

            if !starts_document {
                i += 1;
                continue;
            }

            i += 3;
            let title = lines[i].trim();

            // Skip the title and the two spacer lines after it
            i += 3;
            let mut raw_text = String::new();
            while i < lines.len() && !blank(i) {
                raw_text.push_str(lines[i].trim());
                raw_text.push(' ');
                i += 1;
            }

            let document_id = collection.len();
            let document = if self.strip_symbols {
                let terms = remove_symbols(&raw_text)
                    .split_whitespace()
                    .map(str::to_string)
                    .collect();
                Document::with_terms(document_id, title, raw_text, terms)
            } else {
                Document::new(document_id, title, raw_text)
            };

            tracing::debug!(
                "Extracted #{} '{}' ({} terms)",
                document.document_id,
                document.title,
                document.terms.len()
            );
            collection.push(document);
        }

        collection
    }
}

impl DocumentSource for FableExtractor {
    fn load_all(&self) -> Result<Vec<Document>> {
        let text = fs::read_to_string(&self.source)
            .with_context(|| format!("Cannot read fables file '{}'", self.source.display()))?;

        let collection = self.extract(&text);
        tracing::info!(
            "Extracted {} documents from '{}'",
            collection.len(),
            self.source.display()
        );
        Ok(collection)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::stop_words::is_not_found;

    const SAMPLE: &str = "\
Project preamble
Aesop's Fables



The Wolf and the Lamb


  WOLF, meeting with a Lamb
astray from the fold.

Nothing here



The Bat's Tale


The Bat's wings,
folded.
";

    #[test]
    fn test_extracts_titles_and_bodies() {
        let docs = FableExtractor::new("unused").extract(SAMPLE);

        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].document_id, 0);
        assert_eq!(docs[0].title, "The Wolf and the Lamb");
        assert_eq!(docs[0].raw_text, "WOLF, meeting with a Lamb astray from the fold. ");
        assert_eq!(docs[0].terms[0], "WOLF,");
        assert_eq!(docs[1].document_id, 1);
        assert_eq!(docs[1].title, "The Bat's Tale");
        assert!(docs[1].filtered_terms.is_none());
    }

    #[test]
    fn test_strip_symbols_changes_terms_only() {
        let docs = FableExtractor::new("unused")
            .with_strip_symbols(true)
            .extract(SAMPLE);

        assert_eq!(docs[1].raw_text, "The Bat's wings, folded. ");
        assert_eq!(docs[1].terms, vec!["The", "Bat", "wings", "folded"]);
    }

    #[test]
    fn test_missing_header_gives_empty_collection() {
        let docs = FableExtractor::new("unused").extract("\n\n\n\nTitle\n\n\nBody\n");
        assert!(docs.is_empty());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FableExtractor::new(dir.path().join("aesopa10.txt"))
            .load_all()
            .unwrap_err();
        assert!(is_not_found(&err));
    }

    #[test]
    fn test_load_all_reads_file() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("fables.txt");
        fs::write(&path, SAMPLE).unwrap();

        let docs = FableExtractor::new(&path).load_all().unwrap();
        assert_eq!(docs.len(), 2);
    }
}
