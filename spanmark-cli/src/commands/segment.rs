//! Segment command implementation

use anyhow::Result;
use clap::Args;
use std::io::Write;
use std::path::PathBuf;

use spanmark_core::SentenceInfo;

use super::{init_logging, PipelineArgs};
use crate::input;
use crate::output::{self, OutputFormat};

/// Arguments for the segment command
#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Input file (default: stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub pipeline: PipelineArgs,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl SegmentArgs {
    /// Execute the segment command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        let text = input::read_input(self.input.as_deref())?;
        let annotator = self.pipeline.build_annotator()?;
        let sentences = annotator.segment(&text);
        log::info!("segmented {} sentences", sentences.len());

        let mut writer = output::open_output(self.output.as_deref())?;
        match self.format {
            OutputFormat::Text => write_text(&mut writer, &sentences)?,
            OutputFormat::Json => output::write_json(&mut writer, &sentences)?,
        }
        Ok(())
    }
}

fn write_text<W: Write>(writer: &mut W, sentences: &[SentenceInfo]) -> Result<()> {
    for sentence in sentences {
        writeln!(writer, "{}\t{}\t{}", sentence.sid, sentence.abs_start, sentence.text)?;
    }
    writer.flush()?;
    Ok(())
}
