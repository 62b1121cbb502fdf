// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Persistence that does not belong to any one workflow:
//
//   collection_store.rs — JSON save/load of a document
//                         collection. Used by every use case:
//                         extract writes it, filter reads and
//                         rewrites it, derive reads it.
//
// Reference: Rust Book §9 (Error Handling with anyhow)

/// Collection JSON persistence
pub mod collection_store;
