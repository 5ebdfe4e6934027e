//! Command implementations

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use spanmark_core::{Annotator, Config, Genre};

use crate::input;

pub mod acu;
pub mod annotate;
pub mod cloze;
pub mod prompt;
pub mod segment;

pub use acu::AcuArgs;
pub use annotate::AnnotateArgs;
pub use cloze::ClozeArgs;
pub use prompt::PromptArgs;
pub use segment::SegmentArgs;

/// Document genre, selecting the segmentation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum GenreArg {
    /// Continuous prose split on terminal punctuation
    Narrative,
    /// Speaker turns split per line
    Dialogue,
}

impl From<GenreArg> for Genre {
    fn from(value: GenreArg) -> Self {
        match value {
            GenreArg::Narrative => Genre::Narrative,
            GenreArg::Dialogue => Genre::Dialogue,
        }
    }
}

/// Options shared by every command that runs the annotation pipeline
#[derive(Debug, Args)]
pub struct PipelineArgs {
    /// Language code (en, zh, ja, ko)
    #[arg(short, long, value_name = "CODE", default_value = "en")]
    pub language: String,

    /// Document genre
    #[arg(long, value_enum, default_value = "narrative")]
    pub genre: GenreArg,

    /// Custom lexicon TOML file replacing the embedded default
    #[arg(long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,
}

impl PipelineArgs {
    /// Build an annotator from the command-line options
    pub fn build_annotator(&self) -> Result<Annotator> {
        let mut builder = Config::builder()
            .language(&self.language)
            .genre(self.genre.into());
        if let Some(path) = &self.lexicon {
            builder = builder.lexicon(input::read_lexicon(path)?);
        }
        let config = builder.build().context("Invalid pipeline configuration")?;
        Annotator::with_config(config).context("Failed to construct annotator")
    }
}

/// Initialize logging based on verbosity level
pub fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}
