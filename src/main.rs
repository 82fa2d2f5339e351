// ppmerge: merge macro-expanded preprocessor output with the original source

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

/// Merge a macro-expanded source file with the comments of the original.
///
/// Reads the original source and the preprocessor output for the same file
/// (with `#line` markers), and writes a merged file that keeps the expanded
/// code but restores the comment lines the preprocessor dropped.
#[derive(Parser)]
#[command(name = "ppmerge", version)]
struct Cli {
    /// The original source file, comments included
    original: PathBuf,

    /// The preprocessor output for that file, with #line markers
    preprocessed: PathBuf,

    /// Where to write the merged result
    output: PathBuf,

    /// Filename to match against #line markers, if the preprocessor spells
    /// it differently than the original path (e.g. a bare basename)
    #[arg(long, value_name = "NAME")]
    source_name: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let original = fs::read_to_string(&cli.original)
        .with_context(|| format!("unable to read original file {}", cli.original.display()))?;
    let preprocessed = fs::read_to_string(&cli.preprocessed).with_context(|| {
        format!(
            "unable to read preprocessed file {}",
            cli.preprocessed.display()
        )
    })?;

    // The preprocessor writes the name it was invoked with into its #line
    // markers; by default that is the original path exactly as given here.
    let source_name = cli
        .source_name
        .unwrap_or_else(|| cli.original.to_string_lossy().into_owned());

    let merged = ppmerge::merge(&original, &preprocessed, &source_name)?;

    fs::write(&cli.output, merged)
        .with_context(|| format!("unable to write merged file {}", cli.output.display()))?;

    Ok(())
}
