// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and routes each subcommand to its
// use case. All work happens in Layer 2 (application).
//
//   1. `extract` — fables text file → collection JSON
//   2. `filter`  — fill filtered_terms using one stop-word source
//   3. `derive`  — print the Crouch stop-word list
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, DeriveArgs, ExtractArgs, FilterArgs};

#[derive(Parser, Debug)]
#[command(
    name = "fable-prep",
    version,
    about = "Extract Aesop's fables into a document collection and remove stop words."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the matching use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Extract(args) => run_extract(args),
            Commands::Filter(args)  => run_filter(args),
            Commands::Derive(args)  => run_derive(args),
        }
    }
}

fn run_extract(args: ExtractArgs) -> Result<()> {
    use crate::application::extract_use_case::ExtractUseCase;

    let output = args.output.clone();
    let count  = ExtractUseCase::new(args.into()).execute()?;

    println!("Extracted {count} documents into '{output}'.");
    Ok(())
}

fn run_filter(args: FilterArgs) -> Result<()> {
    use crate::application::filter_use_case::FilterUseCase;

    let summary = FilterUseCase::new(args.into()).execute()?;

    println!(
        "Filtered {} documents with {} stop words: {} → {} terms.",
        summary.documents, summary.stop_words, summary.terms_before, summary.terms_after
    );
    Ok(())
}

fn run_derive(args: DeriveArgs) -> Result<()> {
    use crate::application::derive_use_case::DeriveUseCase;

    let print = args.output.is_none();
    let words = DeriveUseCase::new(args.into()).execute()?;

    if print {
        for word in &words {
            println!("{word}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::filter_use_case::{FilterConfig, StopWordMode};

    #[test]
    fn test_filter_defaults_to_packaged() {
        let cli = Cli::try_parse_from(["fable-prep", "filter"]).unwrap();
        let Commands::Filter(args) = cli.command else { panic!("expected filter") };
        let cfg: FilterConfig = args.into();
        assert_eq!(cfg.mode, StopWordMode::Packaged);
        assert_eq!(cfg.stopwords_resource, "data/stopwords.json");
    }

    #[test]
    fn test_filter_with_user_file() {
        let cli = Cli::try_parse_from(["fable-prep", "filter", "--stopword-file", "englishST.txt"]).unwrap();
        let Commands::Filter(args) = cli.command else { panic!("expected filter") };
        let cfg: FilterConfig = args.into();
        assert_eq!(cfg.mode, StopWordMode::UserFile("englishST.txt".to_string()));
    }

    #[test]
    fn test_stop_word_sources_are_exclusive() {
        let parsed = Cli::try_parse_from([
            "fable-prep", "filter", "--stopword-file", "x.txt", "--by-frequency",
        ]);
        assert!(parsed.is_err());
    }
}
