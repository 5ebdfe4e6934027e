//! Command-line interface for the spanmark annotation pipeline

use anyhow::Result;
use clap::{Parser, Subcommand};

use spanmark_cli::commands::{AcuArgs, AnnotateArgs, ClozeArgs, PromptArgs, SegmentArgs};

/// Text annotation and cloze exercise generation for language learning
#[derive(Debug, Parser)]
#[command(name = "spanmark", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Split text into sentences with document offsets
    Segment(SegmentArgs),
    /// Run the three annotation passes over text
    Annotate(AnnotateArgs),
    /// Select fill-in-the-blank items for text
    Cloze(ClozeArgs),
    /// Validate a star-marked sentence and parse its units
    Acu(AcuArgs),
    /// Build a generation prompt for the marking stages
    Prompt(PromptArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Segment(args) => args.execute(),
        Commands::Annotate(args) => args.execute(),
        Commands::Cloze(args) => args.execute(),
        Commands::Acu(args) => args.execute(),
        Commands::Prompt(args) => args.execute(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }
}
