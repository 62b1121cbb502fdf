// ============================================================
// Layer 4 — Collection Filter
// ============================================================
// Removes stop words from every document of a collection.
//
// The result goes into `filtered_terms`, NOT into `terms`:
//   terms          = [the, fox, and, the, grapes]
//   filtered_terms = [fox, grapes]
//
// Guarantees:
//   - filtered_terms is a subsequence of terms (same order)
//   - terms and every other field are left untouched
//   - running the filter twice gives the same result
//
// The stop words can come from any StopWords implementation,
// so the packaged set and a frequency-derived list both work.

use crate::data::stop_words::is_stop_word;
use crate::domain::document::Document;
use crate::domain::traits::StopWords;

/// Keep every term that is not a stop word, in order.
pub fn remove_stop_words_from_term_list<S: StopWords + ?Sized>(
    terms:      &[String],
    stop_words: &S,
) -> Vec<String> {
    terms
        .iter()
        .filter(|term| !is_stop_word(term.as_str(), stop_words))
        .cloned()
        .collect()
}

/// Set `filtered_terms` on every document of `collection`.
pub fn filter_collection<S: StopWords + ?Sized>(collection: &mut [Document], stop_words: &S) {
    for document in collection.iter_mut() {
        let filtered = remove_stop_words_from_term_list(&document.terms, stop_words);
        tracing::debug!(
            "Document {}: kept {} of {} terms",
            document.document_id,
            filtered.len(),
            document.terms.len()
        );
        document.filtered_terms = Some(filtered);
    }
}

/// Same as [`filter_collection`] but leaves `collection` alone
/// and returns a filtered copy.
pub fn filtered_collection<S: StopWords + ?Sized>(
    collection: &[Document],
    stop_words: &S,
) -> Vec<Document> {
    let mut copy = collection.to_vec();
    filter_collection(&mut copy, stop_words);
    copy
}
