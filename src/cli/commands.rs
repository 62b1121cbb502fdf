// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the three subcommands: `extract`, `filter`, `derive`
// and all their configurable flags.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::application::{
    derive_use_case::DeriveConfig,
    extract_use_case::ExtractConfig,
    filter_use_case::{FilterConfig, StopWordMode},
};
use crate::data::stop_words::PACKAGED_STOP_WORDS_PATH;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split the fables text file into a JSON collection
    Extract(ExtractArgs),

    /// Remove stop words from every document of a collection
    Filter(FilterArgs),

    /// Print the frequency-derived stop-word list of a collection
    Derive(DeriveArgs),
}

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Fables text file
    #[arg(long, default_value = "data/aesopa10.txt")]
    pub source: String,

    /// Collection JSON to write
    #[arg(long, default_value = "data/collection.json")]
    pub output: String,

    /// Strip possessives and punctuation before splitting into terms
    #[arg(long)]
    pub strip_symbols: bool,
}

impl From<ExtractArgs> for ExtractConfig {
    fn from(a: ExtractArgs) -> Self {
        ExtractConfig {
            source_path:     a.source,
            collection_path: a.output,
            strip_symbols:   a.strip_symbols,
        }
    }
}

#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Collection JSON to filter
    #[arg(long, default_value = "data/collection.json")]
    pub collection: String,

    /// Write the result here instead of overwriting the collection
    #[arg(long)]
    pub output: Option<String>,

    /// Packaged stop-word resource (JSON), used when no other source is given
    #[arg(long, default_value = PACKAGED_STOP_WORDS_PATH)]
    pub stopwords_resource: String,

    /// Plain-text stop-word file, one word per line
    #[arg(long, conflicts_with = "by_frequency")]
    pub stopword_file: Option<String>,

    /// Use the collection's own high/low frequency terms as stop words
    #[arg(long)]
    pub by_frequency: bool,
}

/// At most one of --stopword-file / --by-frequency is set (clap
/// enforces it); neither means the packaged list.
impl From<FilterArgs> for FilterConfig {
    fn from(a: FilterArgs) -> Self {
        let mode = match (a.stopword_file, a.by_frequency) {
            (Some(path), _) => StopWordMode::UserFile(path),
            (None, true)    => StopWordMode::ByFrequency,
            (None, false)   => StopWordMode::Packaged,
        };
        FilterConfig {
            collection_path:    a.collection,
            output_path:        a.output,
            stopwords_resource: a.stopwords_resource,
            mode,
        }
    }
}

#[derive(Args, Debug)]
pub struct DeriveArgs {
    /// Collection JSON to analyse
    #[arg(long, default_value = "data/collection.json")]
    pub collection: String,

    /// Also write the list here, one word per line
    #[arg(long)]
    pub output: Option<String>,
}

impl From<DeriveArgs> for DeriveConfig {
    fn from(a: DeriveArgs) -> Self {
        DeriveConfig {
            collection_path: a.collection,
            output_path:     a.output,
        }
    }
}
