/// Round to the nearest integer, halves rounding up (towards +inf).
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// `part / whole * 100`, rounded; 0 when `whole` is zero.
pub fn percent_of(part: f64, whole: f64) -> u32 {
    if whole > 0.0 {
        round_half_up(part / whole * 100.0).max(0) as u32
    } else {
        0
    }
}

/// Pluralize a noun with a trailing "s" when `count != 1`.
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_halves_up() {
        assert_eq!(round_half_up(82.5), 83);
        assert_eq!(round_half_up(82.49), 82);
        assert_eq!(round_half_up(0.0), 0);
    }

    #[test]
    fn percent_of_zero_whole_is_zero() {
        assert_eq!(percent_of(5.0, 0.0), 0);
        assert_eq!(percent_of(1.0, 3.0), 33);
        assert_eq!(percent_of(2.0, 3.0), 67);
    }

    #[test]
    fn plural_suffix() {
        assert_eq!(plural(1, "gap"), "1 gap");
        assert_eq!(plural(3, "gap"), "3 gaps");
    }
}
