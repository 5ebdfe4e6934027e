//! Cloze command implementation

use anyhow::Result;
use clap::Args;
use std::io::Write;
use std::path::PathBuf;

use spanmark_core::{ClozeItem, ClozeVersion, NormalizedText};

use super::{init_logging, PipelineArgs};
use crate::input;
use crate::output::{self, OutputFormat};

/// Exercise length variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum VersionArg {
    /// 6% of the text hidden
    Short,
    /// 12% of the text hidden
    Long,
}

impl From<VersionArg> for ClozeVersion {
    fn from(value: VersionArg) -> Self {
        match value {
            VersionArg::Short => ClozeVersion::Short,
            VersionArg::Long => ClozeVersion::Long,
        }
    }
}

/// Arguments for the cloze command
#[derive(Debug, Args)]
pub struct ClozeArgs {
    /// Input file (default: stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Exercise length variant
    #[arg(long = "version", value_enum, default_value = "short")]
    pub variant: VersionArg,

    #[command(flatten)]
    pub pipeline: PipelineArgs,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ClozeArgs {
    /// Execute the cloze command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        let text = input::read_input(self.input.as_deref())?;
        let annotator = self.pipeline.build_annotator()?;
        let blanks = annotator.cloze(&text, self.variant.into());
        log::info!("selected {} blanks", blanks.len());

        let mut writer = output::open_output(self.output.as_deref())?;
        match self.format {
            OutputFormat::Text => {
                let normalized = NormalizedText::new(&text);
                write_text(&mut writer, normalized.as_str(), &blanks)?
            }
            OutputFormat::Json => output::write_json(&mut writer, &blanks)?,
        }
        Ok(())
    }
}

/// Render the exercise: numbered blanks in the text, then the answer key
fn write_text<W: Write>(writer: &mut W, text: &str, blanks: &[ClozeItem]) -> Result<()> {
    let chars: Vec<char> = text.chars().collect();
    let mut rendered = String::new();
    let mut pos = 0;
    for (i, blank) in blanks.iter().enumerate() {
        rendered.extend(&chars[pos..blank.start]);
        rendered.push_str(&format!("__({})__", i + 1));
        pos = blank.end;
    }
    rendered.extend(&chars[pos..]);
    writeln!(writer, "{rendered}")?;

    for (i, blank) in blanks.iter().enumerate() {
        writeln!(writer, "{}. {} ({})", i + 1, blank.answer, blank.hint)?;
    }
    writer.flush()?;
    Ok(())
}
