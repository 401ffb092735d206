//! Rendering of classification outcomes.

use std::io::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::classify::Outcome;
use crate::core::types::Classification;

/// Single diagnostic printed when validation fails.
pub const INVALID_INPUT_MESSAGE: &str = "Por lo menos uno de los datos de entrada no es correcto.";

/// Output format for `sastry classify`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// Fixed human-readable report.
    #[default]
    Text,
    /// Pretty-printed JSON of the full outcome.
    Json,
}

pub fn write_outcome<W: Write>(out: &mut W, outcome: &Outcome, format: Format) -> Result<()> {
    match format {
        Format::Text => write_text(out, outcome),
        Format::Json => write_json(out, outcome),
    }
}

fn write_text<W: Write>(out: &mut W, outcome: &Outcome) -> Result<()> {
    match outcome {
        Outcome::Invalid { .. } => {
            writeln!(out, "{INVALID_INPUT_MESSAGE}").context("write report")?;
        }
        Outcome::Classified { numbers } => {
            for classification in numbers {
                write_block(out, classification).context("write report")?;
            }
        }
    }
    Ok(())
}

/// Flags print as `0`/`1`; the missing space after the second colon is part
/// of the format.
fn write_block<W: Write>(out: &mut W, classification: &Classification) -> std::io::Result<()> {
    writeln!(
        out,
        "{}: {}.",
        classification.rank.label(),
        classification.value
    )?;
    writeln!(out, "- Es Sastry: {}", u8::from(classification.sastry))?;
    writeln!(out, "- Es Apocaliptico:{}", u8::from(classification.apocalyptic))
}

/// Serialize `outcome` to pretty-printed JSON with trailing newline.
fn write_json<W: Write>(out: &mut W, outcome: &Outcome) -> Result<()> {
    let mut payload = serde_json::to_string_pretty(outcome).context("serialize json")?;
    payload.push('\n');
    out.write_all(payload.as_bytes()).context("write report")?;
    Ok(())
}
