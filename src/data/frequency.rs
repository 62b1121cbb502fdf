// ============================================================
// Layer 4 — Frequency-Based Stop-Word Deriver
// ============================================================
// Crouch (1990): both very common and very rare terms are poor
// discriminators, so both are treated as stop words.
//
// Algorithm:
//   1. Flatten every document's terms (document order, then
//      term order) into one sequence, duplicates kept
//   2. Count occurrences per distinct term
//   3. Sort distinct terms by descending count
//      Ties keep first-seen order in the flattened sequence
//   4. N = distinct terms, k = N / 10 (floor)
//      high = first k terms, low = last k terms
//   5. Result = high followed by low, no dedup
//
// Example (N = 10, k = 1):
//   terms  = a a a b c d e f g h i j
//   sorted = a(3) b c d e f g h i j
//   result = [a, j]
//
// N < 10 gives k = 0 and an empty list. That is accepted,
// not an error.
//
// Reference: C. J. Crouch (1990), "An approach to the automatic
//            construction of global thesauri"

use std::collections::HashMap;

use crate::domain::document::Document;

/// Count every distinct term, in first-seen order.
///
/// Returns (term, count) pairs ordered by first occurrence.
pub fn term_frequencies(collection: &[Document]) -> Vec<(String, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for term in collection.iter().flat_map(|d| d.terms.iter()) {
        match index.get(term.as_str()) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(term.as_str(), counts.len());
                counts.push((term.clone(), 1));
            }
        }
    }

    counts
}

/// Build a stop-word list from the high- and low-frequency
/// terms of `collection`.
///
/// The list is NOT merged with any packaged list; callers pick
/// which one to filter with.
pub fn create_stop_word_list_by_frequency(collection: &[Document]) -> Vec<String> {
    let mut ranked = term_frequencies(collection);

    // sort_by is stable, so equal counts stay in first-seen order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let n = ranked.len();
    let k = n / 10;

    let high = ranked[..k].iter();
    let low  = ranked[n - k..].iter();

    let stop_words: Vec<String> = high.chain(low).map(|(term, _)| term.clone()).collect();

    tracing::debug!(
        "Derived {} stop words from {} distinct terms ({} high + {} low)",
        stop_words.len(),
        n,
        k,
        k
    );

    stop_words
}
