// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Each use case orchestrates the data and infra layers for
// one user goal. No parsing or filtering logic lives here,
// only workflow coordination.

// Fables text file → collection JSON
pub mod extract_use_case;

// Collection JSON → collection JSON with filtered_terms
pub mod filter_use_case;

// Collection JSON → Crouch stop-word list
pub mod derive_use_case;
