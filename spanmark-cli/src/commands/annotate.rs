//! Annotate command implementation

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

use spanmark_core::{Annotation, PronounResolution, SpanItem, SvoTriple};

use super::{init_logging, PipelineArgs};
use crate::input;
use crate::output::{self, OutputFormat};

/// Arguments for the annotate command
#[derive(Debug, Args)]
pub struct AnnotateArgs {
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

/// JSON shape of the annotate command output
#[derive(Debug, Serialize)]
struct AnnotationReport {
    text: String,
    spans: Vec<SpanItem>,
    pronouns: Vec<PronounResolution>,
    triples: Vec<SvoTriple>,
}

impl From<Annotation> for AnnotationReport {
    fn from(annotation: Annotation) -> Self {
        Self {
            text: annotation.text,
            spans: annotation.spans,
            pronouns: annotation.pronouns,
            triples: annotation.triples,
        }
    }
}

impl AnnotateArgs {
    /// Execute the annotate command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        let text = input::read_input(self.input.as_deref())?;
        let annotator = self.pipeline.build_annotator()?;
        let annotation = annotator.annotate(&text);
        log::info!(
            "found {} spans, {} pronouns, {} triples",
            annotation.spans.len(),
            annotation.pronouns.len(),
            annotation.triples.len()
        );

        let mut writer = output::open_output(self.output.as_deref())?;
        match self.format {
            OutputFormat::Text => write_text(&mut writer, &annotation)?,
            OutputFormat::Json => {
                output::write_json(&mut writer, &AnnotationReport::from(annotation))?
            }
        }
        Ok(())
    }
}

fn write_text<W: Write>(writer: &mut W, annotation: &Annotation) -> Result<()> {
    for item in &annotation.spans {
        writeln!(
            writer,
            "{}..{}\t{}\t{}",
            item.span.start,
            item.span.end,
            item.tag.label(),
            item.surface
        )?;
    }
    for resolution in &annotation.pronouns {
        let candidates: Vec<String> = resolution
            .antecedents
            .iter()
            .map(|s| format!("{}..{}", s.start, s.end))
            .collect();
        writeln!(
            writer,
            "{}..{}\tpronoun\t[{}]",
            resolution.pronoun.start,
            resolution.pronoun.end,
            candidates.join(", ")
        )?;
    }
    for triple in &annotation.triples {
        writeln!(
            writer,
            "{}..{}\tsvo\tverb {}..{} object {}..{}",
            triple.subject.start,
            triple.subject.end,
            triple.verb.start,
            triple.verb.end,
            triple.object.start,
            triple.object.end
        )?;
    }
    writer.flush()?;
    Ok(())
}
