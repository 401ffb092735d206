//! Exact decimal digit counting.

/// Count the decimal digits of `n`, ignoring its sign.
///
/// `0` has one digit. Powers of ten are counted exactly.
pub fn digit_count(n: i32) -> u32 {
    n.unsigned_abs().checked_ilog10().map_or(1, |log| log + 1)
}
