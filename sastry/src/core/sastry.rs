//! Sastry numbers: `n` followed by `n + 1` reads as a perfect square.
//!
//! `183` is one: `183184 = 428²`.

use std::ops::RangeInclusive;

/// Decimal concatenation of `n` and `n + 1`, e.g. `12` becomes `1213`.
///
/// Returns `None` when the result does not fit in a `u64`.
pub fn concat_successor(n: u32) -> Option<u64> {
    let next = n.checked_add(1)?;
    format!("{n}{next}").parse().ok()
}

/// True if `value` is the square of an integer.
pub fn is_perfect_square(value: u64) -> bool {
    let root = value.isqrt();
    root * root == value
}

pub fn is_sastry(n: u32) -> bool {
    concat_successor(n).is_some_and(is_perfect_square)
}

/// Brute-force every Sastry number in `range`, ascending.
pub fn sastry_numbers(range: RangeInclusive<u32>) -> Vec<u32> {
    range.filter(|&n| is_sastry(n)).collect()
}
