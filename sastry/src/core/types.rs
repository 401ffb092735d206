//! Shared deterministic types for classification.
//!
//! These types define the contract between the validator, the sorter and the
//! classifiers. They serialize stably for machine-readable output.

use serde::Serialize;

/// Three integers that passed validation.
///
/// Every value is natural, at most four decimal digits, and distinct from the
/// other two. Only [`crate::core::validator::validate_triple`] builds one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triple([u32; 3]);

impl Triple {
    pub(crate) fn from_validated(values: [u32; 3]) -> Self {
        Self(values)
    }

    /// Values in input order.
    pub fn values(&self) -> [u32; 3] {
        self.0
    }
}

/// Position of a number after descending ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    Largest,
    Middle,
    Smallest,
}

impl Rank {
    /// Ranks in output order.
    pub const ALL: [Rank; 3] = [Rank::Largest, Rank::Middle, Rank::Smallest];

    /// Label printed before the number in the text report.
    pub fn label(self) -> &'static str {
        match self {
            Rank::Largest => "Numero mayor",
            Rank::Middle => "Numero intermedio",
            Rank::Smallest => "Numero menor",
        }
    }
}

/// Classification flags for one ranked number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub rank: Rank,
    pub value: u32,
    pub sastry: bool,
    pub apocalyptic: bool,
}
