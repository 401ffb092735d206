//! Descending ordering of the validated triple.

/// Order three values from largest to smallest.
pub fn sort_descending<T: Ord>(mut values: [T; 3]) -> [T; 3] {
    values.sort_by(|left, right| right.cmp(left));
    values
}
