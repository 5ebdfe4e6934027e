//! Prompt command implementation

use anyhow::{bail, Result};
use clap::Args;
use std::io::Write;

use spanmark_core::{prompt, Language};

use super::init_logging;
use crate::output;

/// Prompt-building stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StageArg {
    /// Stage 1: ask for maximal star-marking of a sentence
    Oversegment,
    /// Stage 2: ask for merging of over-fine fragments
    Refine,
}

/// Arguments for the prompt command
#[derive(Debug, Args)]
pub struct PromptArgs {
    /// Which prompt to build
    #[arg(value_enum)]
    pub stage: StageArg,

    /// Language code (en, zh, ja, ko), used by the oversegment stage
    #[arg(short, long, value_name = "CODE", default_value = "en")]
    pub language: String,

    /// The sentence to mark (oversegment stage)
    #[arg(long, value_name = "TEXT")]
    pub sentence: Option<String>,

    /// The stage-1 marked sentence to refine (refine stage)
    #[arg(long, value_name = "TEXT")]
    pub marked: Option<String>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl PromptArgs {
    /// Build and print the requested prompt
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        let text = match self.stage {
            StageArg::Oversegment => {
                let Some(sentence) = &self.sentence else {
                    bail!("the oversegment stage requires --sentence");
                };
                let language = Language::try_from_code(&self.language)
                    .ok_or_else(|| anyhow::anyhow!("unknown language '{}'", self.language))?;
                if prompt::text_exceeds_limit(sentence) {
                    log::warn!("sentence exceeds the supported length limit");
                }
                prompt::build_oversegment_prompt(language, sentence)
            }
            StageArg::Refine => {
                let Some(marked) = &self.marked else {
                    bail!("the refine stage requires --marked");
                };
                prompt::build_refine_prompt(marked)
            }
        };

        let mut writer = output::open_output(None)?;
        writeln!(writer, "{text}")?;
        writer.flush()?;
        Ok(())
    }
}
