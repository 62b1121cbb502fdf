// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Two seams:
//   - DocumentSource: anything that produces a collection
//     (the fable extractor, a persisted JSON collection)
//   - StopWords: anything that answers "is this term a stop word?"
//     (the packaged/user set, or a frequency-derived list)
//
// The filter only sees StopWords, so it works with either
// stop-word origin without knowing which one is active.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use crate::domain::document::Document;

// ─── DocumentSource ───────────────────────────────────────────────────────────
/// Any component that can produce a document collection.
///
/// Implementations:
///   - FableExtractor  → parses the fable text file
///   - CollectionStore → reads a previously saved JSON collection
pub trait DocumentSource {
    /// Load the whole collection, in document id order.
    fn load_all(&self) -> Result<Vec<Document>>;
}

// ─── StopWords ────────────────────────────────────────────────────────────────
/// Exact, case-sensitive stop-word membership.
///
/// Implementations:
///   - StopWordSet → packaged or user-supplied list
///   - [String]    → ordered list from the frequency deriver
pub trait StopWords {
    /// True iff `term` is exactly one of the stop words.
    fn contains_term(&self, term: &str) -> bool;

    /// Number of entries, duplicates included for ordered lists.
    fn word_count(&self) -> usize;
}

impl StopWords for [String] {
    fn contains_term(&self, term: &str) -> bool {
        self.iter().any(|w| w == term)
    }

    fn word_count(&self) -> usize {
        self.len()
    }
}

impl StopWords for Vec<String> {
    fn contains_term(&self, term: &str) -> bool {
        self.as_slice().contains_term(term)
    }

    fn word_count(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_membership_is_exact() {
        let list = vec!["the".to_string(), "a".to_string()];
        assert!(list.contains_term("the"));
        assert!(!list.contains_term("The"));
        assert!(!list.contains_term("th"));
    }
}
