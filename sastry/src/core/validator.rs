//! Input rules for the classified triple.

use serde::Serialize;
use thiserror::Error;

use crate::core::digits::digit_count;
use crate::core::types::Triple;

/// Largest number of decimal digits an accepted value may have.
pub const MAX_DIGITS: u32 = 4;

/// A single broken rule, naming the offending value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "rule", content = "value", rename_all = "snake_case")]
pub enum Violation {
    #[error("{0} is not a natural number")]
    NotNatural(i32),
    #[error("{0} appears more than once")]
    Duplicate(i32),
    #[error("{0} has more than 4 digits")]
    TooManyDigits(i32),
}

/// Check every rule and collect all violations:
/// - each value is natural (`> 0`)
/// - each value has at most [`MAX_DIGITS`] decimal digits
/// - values are pairwise distinct
///
/// Each violation is reported once per value, however often the value repeats.
/// An empty result means the triple is valid.
pub fn check_triple(values: [i32; 3]) -> Vec<Violation> {
    let mut violations = Vec::new();

    for value in values {
        if value <= 0 {
            push_once(&mut violations, Violation::NotNatural(value));
        } else if digit_count(value) > MAX_DIGITS {
            push_once(&mut violations, Violation::TooManyDigits(value));
        }
    }

    for (index, value) in values.iter().enumerate() {
        if values[..index].contains(value) {
            push_once(&mut violations, Violation::Duplicate(*value));
        }
    }

    violations
}

fn push_once(violations: &mut Vec<Violation>, violation: Violation) {
    if !violations.contains(&violation) {
        violations.push(violation);
    }
}

/// Validate all-or-nothing, returning the typed triple on success.
pub fn validate_triple(values: [i32; 3]) -> Result<Triple, Vec<Violation>> {
    let violations = check_triple(values);
    if !violations.is_empty() {
        return Err(violations);
    }
    Ok(Triple::from_validated(values.map(i32::unsigned_abs)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_small_distinct_naturals() {
        let triple = validate_triple([1, 2, 3]).expect("valid");
        assert_eq!(triple.values(), [1, 2, 3]);
    }

    #[test]
    fn accepts_four_digit_boundary() {
        let triple = validate_triple([9999, 1, 9998]).expect("valid");
        assert_eq!(triple.values(), [9999, 1, 9998]);
    }

    #[test]
    fn rejects_zero_and_negatives() {
        assert_eq!(check_triple([0, 1, 2]), vec![Violation::NotNatural(0)]);
        assert_eq!(check_triple([1, -7, 2]), vec![Violation::NotNatural(-7)]);
    }

    #[test]
    fn rejects_five_digit_values() {
        assert_eq!(
            check_triple([10000, 1, 2]),
            vec![Violation::TooManyDigits(10000)]
        );
        assert!(validate_triple([1, 2, i32::MAX]).is_err());
    }

    #[test]
    fn rejects_duplicates_once_per_value() {
        assert_eq!(check_triple([5, 5, 9]), vec![Violation::Duplicate(5)]);
        assert_eq!(check_triple([3, 3, 3]), vec![Violation::Duplicate(3)]);
        assert_eq!(check_triple([4, 9, 4]), vec![Violation::Duplicate(4)]);
    }

    #[test]
    fn collects_every_violation() {
        let violations = check_triple([-1, -2, 12345]);
        assert_eq!(
            violations,
            vec![
                Violation::NotNatural(-1),
                Violation::NotNatural(-2),
                Violation::TooManyDigits(12345),
            ]
        );
    }

    #[test]
    fn repeated_value_reports_each_rule_once() {
        assert_eq!(
            check_triple([-1, -1, -1]),
            vec![Violation::NotNatural(-1), Violation::Duplicate(-1)]
        );
        assert_eq!(
            check_triple([12345, 12345, 7]),
            vec![Violation::TooManyDigits(12345), Violation::Duplicate(12345)]
        );
    }

    #[test]
    fn violation_messages_name_the_value() {
        assert_eq!(
            Violation::TooManyDigits(10000).to_string(),
            "10000 has more than 4 digits"
        );
        assert_eq!(Violation::Duplicate(5).to_string(), "5 appears more than once");
    }
}
