//! Classification pipeline for `sastry classify`.
//!
//! Reads the triple, validates it, ranks it descending and classifies each
//! number. Rendering lives in [`crate::report`].

use std::io::BufRead;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use crate::core::apocalyptic::is_apocalyptic;
use crate::core::sastry::is_sastry;
use crate::core::sorter::sort_descending;
use crate::core::types::{Classification, Rank};
use crate::core::validator::{Violation, validate_triple};
use crate::io::input::read_triple;

/// Structured pipeline outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    /// At least one value broke a validation rule.
    Invalid { violations: Vec<Violation> },
    /// All three values, largest first.
    Classified { numbers: [Classification; 3] },
}

/// Classify an already-parsed triple.
pub fn classify_triple(values: [i32; 3]) -> Outcome {
    debug!(?values, "classifying triple");
    let triple = match validate_triple(values) {
        Ok(triple) => triple,
        Err(violations) => {
            for violation in &violations {
                debug!(%violation, "validation failed");
            }
            return Outcome::Invalid { violations };
        }
    };

    let ranked = sort_descending(triple.values());
    let numbers = std::array::from_fn(|index| classify_number(Rank::ALL[index], ranked[index]));
    Outcome::Classified { numbers }
}

pub fn classify_number(rank: Rank, value: u32) -> Classification {
    let classification = Classification {
        rank,
        value,
        sastry: is_sastry(value),
        apocalyptic: is_apocalyptic(value),
    };
    debug!(
        ?rank,
        value,
        sastry = classification.sastry,
        apocalyptic = classification.apocalyptic,
        "classified number"
    );
    classification
}

/// Read three integers from `reader` and classify them.
pub fn classify_reader<R: BufRead>(reader: R) -> Result<Outcome> {
    let values = read_triple(reader).context("read three integers")?;
    Ok(classify_triple(values))
}
