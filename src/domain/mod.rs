// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain structs and traits describing the collection:
// what a document IS and what a stop-word list can answer.
//
// Rules for this layer:
//   - NO file I/O
//   - NO logging
//   - Only data types and the traits other layers implement

// One extracted fable
pub mod document;

// Core abstractions (DocumentSource, StopWords)
pub mod traits;
