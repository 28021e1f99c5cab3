//! Quiz text to CSV conversion.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};

use anyhow::{Context, Result};
use quiz_core::parser::{parse_line, strip_bom};
use quiz_core::{ParseError, TableWriter};

use crate::config::Config;

/// How a conversion run ended.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every line was valid.
    Completed { written: usize },
    /// Stopped at the first invalid line; `written` rows precede it.
    Halted { written: usize, error: ParseError },
}

impl Outcome {
    pub fn written(&self) -> usize {
        match self {
            Outcome::Completed { written } | Outcome::Halted { written, .. } => *written,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed { .. })
    }
}

/// Convert `config.input` into a fresh table at `config.output`.
///
/// The output is truncated and its header written before any input is read,
/// so a halted run leaves the header plus the rows converted so far.
pub fn convert_file(config: &Config) -> Result<Outcome> {
    let mut table = TableWriter::create(&config.output)
        .with_context(|| format!("creating {}", config.output.display()))?;

    let input = File::open(&config.input)
        .with_context(|| format!("opening {}", config.input.display()))?;

    tracing::info!(
        "Converting {} into {}",
        config.input.display(),
        config.output.display()
    );

    let outcome = convert(BufReader::new(input), &mut table)?;
    table
        .into_inner()
        .with_context(|| format!("flushing {}", config.output.display()))?;

    Ok(outcome)
}

/// Parse every line of `input` and append it to `table`, stopping at the
/// first invalid line.
pub fn convert<R: BufRead, W: Write>(input: R, table: &mut TableWriter<W>) -> Result<Outcome> {
    for (idx, line) in input.lines().enumerate() {
        let line_number = idx + 1;
        let line = line.with_context(|| format!("reading line {line_number}"))?;
        let line: &str = if line_number == 1 { strip_bom(&line) } else { &line };

        match parse_line(line, line_number) {
            Ok(record) => {
                table
                    .append(&record)
                    .with_context(|| format!("writing row for line {line_number}"))?;
                tracing::debug!("Converted line {}", line_number);
            }
            Err(error) => {
                tracing::warn!("Stopped at line {}: {}", line_number, error);
                return Ok(Outcome::Halted {
                    written: table.written(),
                    error,
                });
            }
        }
    }

    tracing::info!("Converted {} questions", table.written());
    Ok(Outcome::Completed {
        written: table.written(),
    })
}

/// Print the user-facing result of a run.
pub fn report<W: Write>(outcome: &Outcome, out: &mut W) -> std::io::Result<()> {
    match outcome {
        Outcome::Completed { .. } => writeln!(out, "DONE"),
        Outcome::Halted { error, .. } => {
            match error {
                ParseError::IncompleteOptions { .. } => writeln!(out, "NOT ALL ANSWERS")?,
                ParseError::OutOfOrderOptions { .. } => writeln!(out, "WRONG ORDER")?,
                _ => {}
            }
            writeln!(out, "{} {}", error.line_number(), error.content())
        }
    }
}
