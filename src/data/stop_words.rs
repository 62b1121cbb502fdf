// ============================================================
// Layer 4 — Stop-Word Sources
// ============================================================
// Two independent ways to obtain a static stop-word list:
//
//   1. Packaged default list (data/stopwords.json)
//      Loaded by an explicit call that returns an immutable
//      StopWordSet. A missing resource is NOT an error: we log
//      a warning and hand back an empty set.
//
//   2. User-supplied list (plain text, one word per line)
//      Returned verbatim. A missing file IS an error: the caller
//      asked for this exact file, so we never fall back.
//
// Membership is exact and case-sensitive. Nothing here lowercases
// or trims the words.

use std::{
    collections::HashSet,
    fs,
    io,
    path::Path,
};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::domain::traits::StopWords;

/// Where the packaged list lives relative to the working directory
pub const PACKAGED_STOP_WORDS_PATH: &str = "data/stopwords.json";

/// An immutable set of stop words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWordSet {
    words: HashSet<String>,
}

/// Accepted shapes of the packaged resource:
/// a JSON array of words, or an object keyed by word.
#[derive(Deserialize)]
#[serde(untagged)]
enum PackagedList {
    Words(Vec<String>),
    Keyed(serde_json::Map<String, serde_json::Value>),
}

impl StopWordSet {
    /// A set that filters nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a set from any list of words, kept exactly as given
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { words: words.into_iter().map(Into::into).collect() }
    }

    /// Load the packaged default list.
    ///
    /// A missing file yields an empty set and a warning.
    /// Unreadable or malformed files are errors.
    pub fn load_packaged(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(
                    "No stop-word list found at '{}', using an empty one",
                    path.display()
                );
                return Ok(Self::empty());
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Cannot read stop-word resource '{}'", path.display())
                });
            }
        };

        let parsed: PackagedList = serde_json::from_str(&json)
            .with_context(|| format!("Malformed stop-word resource '{}'", path.display()))?;

        let set = match parsed {
            PackagedList::Words(words) => Self::from_words(words),
            PackagedList::Keyed(map)   => Self::from_words(map.into_iter().map(|(k, _)| k)),
        };

        tracing::info!("Loaded {} packaged stop words from '{}'", set.len(), path.display());
        Ok(set)
    }

    /// Number of distinct stop words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if the set filters nothing
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl StopWords for StopWordSet {
    fn contains_term(&self, term: &str) -> bool {
        self.words.contains(term)
    }

    fn word_count(&self) -> usize {
        self.len()
    }
}

impl From<Vec<String>> for StopWordSet {
    fn from(words: Vec<String>) -> Self {
        Self::from_words(words)
    }
}

/// Read a plain-text stop-word file, one word per line.
///
/// Lines are returned as-is: no trimming, no dedup, no case folding.
/// A missing file is an error whose root cause is an
/// `io::Error` of kind `NotFound` (see [`is_not_found`]).
pub fn load_stop_word_list(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();

    let text = fs::read_to_string(path)
        .with_context(|| format!("Cannot read stop-word file '{}'", path.display()))?;

    let words: Vec<String> = text.lines().map(str::to_string).collect();
    tracing::debug!("Read {} lines from '{}'", words.len(), path.display());
    Ok(words)
}

/// Write a stop-word list in the format `load_stop_word_list` reads.
pub fn save_stop_word_list(words: &[String], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    let mut text = words.join("\n");
    if !words.is_empty() {
        text.push('\n');
    }

    fs::write(path, text)
        .with_context(|| format!("Cannot write stop-word file '{}'", path.display()))?;
    tracing::info!("Wrote {} stop words to '{}'", words.len(), path.display());
    Ok(())
}

/// True iff `term` is exactly an element of `stop_words`.
pub fn is_stop_word<S: StopWords + ?Sized>(term: &str, stop_words: &S) -> bool {
    stop_words.contains_term(term)
}

/// True if any error in the chain is a missing-file I/O error.
pub fn is_not_found(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .map_or(false, |e| e.kind() == io::ErrorKind::NotFound)
    })
}
