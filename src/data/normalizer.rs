// ============================================================
// Layer 4 — Symbol Normalizer
// ============================================================
// Strips possessives and punctuation from raw text before it
// is split into terms.
//
// Cleaning steps (applied in order):
//   1. Remove every "'s" substring (possessive marker)
//   2. Remove every ASCII punctuation character
//
// Order matters: step 1 targets exactly "'s"; step 2 then removes
// any remaining lone apostrophes along with all other punctuation.
//
// Example:
//   "Nature's gift, isn't it?"
//   step 1 → "Nature gift, isn't it?"
//   step 2 → "Nature gift isnt it"
//
// Not part of the default pipeline: the extractor only applies
// it when symbol stripping is switched on.

/// Remove "'s" and then every ASCII punctuation character.
/// Alphanumerics, whitespace and non-ASCII characters are kept.
pub fn remove_symbols(text: &str) -> String {
    text.replace("'s", "")
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect()
}
