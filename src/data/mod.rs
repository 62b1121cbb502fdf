// ============================================================
// Layer 4 — Text Pipeline
// ============================================================
// Everything between the raw fables file and a filtered
// collection:
//
//   aesopa10.txt
//       │
//       ▼
//   FableExtractor    → splits the file into Documents
//       │               (optionally via remove_symbols)
//       ▼
//   Stop words        → packaged set, user list,
//       │               or frequency-derived list
//       ▼
//   filter_collection → fills each document's filtered_terms
//
// Each module is responsible for exactly one step.

/// Splits the fables file into documents
pub mod extractor;

/// Strips possessives and punctuation
pub mod normalizer;

/// Packaged and user-supplied stop-word lists
pub mod stop_words;

/// Crouch (1990) frequency-based stop-word list
pub mod frequency;

/// Removes stop words from every document
pub mod filter;
