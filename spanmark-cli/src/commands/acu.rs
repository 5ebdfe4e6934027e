//! Acu command implementation

use anyhow::Result;
use clap::Args;
use std::io::Write;

use spanmark_core::{acu, AcuUnit};

use super::init_logging;
use crate::error::CliError;
use crate::output::{self, OutputFormat};

/// Arguments for the acu command
#[derive(Debug, Args)]
pub struct AcuArgs {
    /// The original sentence the markup must reproduce
    #[arg(long, value_name = "TEXT")]
    pub original: String,

    /// The star-marked sentence returned by the generator
    #[arg(long, value_name = "TEXT")]
    pub marked: String,

    /// Character offset of the sentence in its document
    #[arg(long, value_name = "N", default_value = "0")]
    pub abs_start: usize,

    /// 1-based sentence id
    #[arg(long, value_name = "N", default_value = "1")]
    pub sid: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl AcuArgs {
    /// Validate the markup and print the parsed units
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        if !acu::validate_marked(&self.original, &self.marked) {
            return Err(CliError::InvalidMarkup(
                "the marked sentence does not reproduce the original".to_string(),
            )
            .into());
        }

        let units = acu::parse_units(&self.marked, self.abs_start, self.sid);
        log::info!("parsed {} units", units.len());

        let mut writer = output::open_output(None)?;
        match self.format {
            OutputFormat::Text => write_text(&mut writer, &units)?,
            OutputFormat::Json => output::write_json(&mut writer, &units)?,
        }
        Ok(())
    }
}

fn write_text<W: Write>(writer: &mut W, units: &[AcuUnit]) -> Result<()> {
    for unit in units {
        writeln!(writer, "{}..{}\ts{}\t{}", unit.start, unit.end, unit.sid, unit.text)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_text_format() {
        let units = vec![AcuUnit {
            text: "你好".to_string(),
            start: 3,
            end: 5,
            sid: 2,
        }];
        let mut buffer = Vec::new();
        write_text(&mut buffer, &units).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "3..5\ts2\t你好\n");
    }
}
