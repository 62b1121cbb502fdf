// ============================================================
// Layer 3 — Document Domain Type
// ============================================================
// Represents a single fable extracted from the source text.
// Plain data, no behaviour beyond construction.
//
// Field lifecycle:
//   document_id, title, raw_text, terms → set once at extraction
//   filtered_terms                      → written by the stop-word filter
//   stemmed_terms                       → written by an external stemmer
//
// The two derived fields are Option so that "never computed"
// (null in JSON) stays distinguishable from "computed, empty".
//
// Reference: Rust Book §5 (Structs and Methods)

use serde::{Deserialize, Serialize};

/// One story of the collection.
///
/// Every field is `#[serde(default)]` so a persisted collection with
/// missing keys still loads instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    /// Sequential id, unique within the collection that created it
    pub document_id: usize,

    /// Title line of the fable
    pub title: String,

    /// Body text: every source line trimmed and followed by one space
    pub raw_text: String,

    /// Whitespace tokens of `raw_text`, in order
    pub terms: Vec<String>,

    /// `terms` minus stop words; None until filtering has run
    pub filtered_terms: Option<Vec<String>>,

    /// Stemmed terms from an external stemmer; None if never stemmed
    pub stemmed_terms: Option<Vec<String>>,
}

impl Document {
    /// Create a Document whose `terms` are the whitespace tokens
    /// of `raw_text`.
    ///
    /// Example:
    ///   let doc = Document::new(0, "The Fox", "A fox saw grapes ");
    pub fn new(document_id: usize, title: impl Into<String>, raw_text: impl Into<String>) -> Self {
        let raw_text = raw_text.into();
        let terms = raw_text.split_whitespace().map(str::to_string).collect();
        Self::with_terms(document_id, title, raw_text, terms)
    }

    /// Create a Document with an explicit term list.
    /// Used when the terms were normalised before tokenisation.
    pub fn with_terms(
        document_id: usize,
        title:       impl Into<String>,
        raw_text:    impl Into<String>,
        terms:       Vec<String>,
    ) -> Self {
        Self {
            document_id,
            title:          title.into(),
            raw_text:       raw_text.into(),
            terms,
            filtered_terms: None,
            stemmed_terms:  None,
        }
    }
}
