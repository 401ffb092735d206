//! Apocalyptic numbers: the decimal rendering contains `666`.

const BEAST: &str = "666";

pub fn is_apocalyptic(n: u32) -> bool {
    n.to_string().contains(BEAST)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_contiguous_sixes() {
        assert!(is_apocalyptic(666));
        assert!(is_apocalyptic(6660));
        assert!(is_apocalyptic(1666));
    }

    #[test]
    fn scattered_sixes_do_not_count() {
        assert!(!is_apocalyptic(123));
        assert!(!is_apocalyptic(66));
        assert!(!is_apocalyptic(6066));
        assert!(!is_apocalyptic(6606));
    }

    #[test]
    fn four_digit_range_has_nineteen() {
        let count = (1..=9999).filter(|&n| is_apocalyptic(n)).count();
        assert_eq!(count, 19);
    }
}
