/// Monetary amounts are integer minor units (cents). Two-decimal values
/// arrive from the transport layer already converted.
pub type Cents = i64;

/// Half-up rounding of `percent`% of `total`, at cent granularity.
/// Callers guarantee `total >= 0` and `percent` in [0, 100].
pub fn percentage_of(total: Cents, percent: f64) -> Cents {
    (total as f64 * percent / 100.0 + 0.5).floor() as Cents
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_percentage() {
        // 10% of 1550.00
        assert_eq!(percentage_of(155_000, 10.0), 15_500);
        assert_eq!(percentage_of(155_000, 0.0), 0);
        assert_eq!(percentage_of(155_000, 100.0), 155_000);
    }

    #[test]
    fn test_half_up_on_fractional_cents() {
        // 12.5% of 13.33 = 1.66625 -> 1.67
        assert_eq!(percentage_of(1_333, 12.5), 167);
        // 15% of 11.10 = 1.665 -> 1.67
        assert_eq!(percentage_of(1_110, 15.0), 167);
        // 1% of 0.49 = 0.0049 -> 0.00
        assert_eq!(percentage_of(49, 1.0), 0);
    }

    #[test]
    fn test_zero_total() {
        assert_eq!(percentage_of(0, 37.5), 0);
    }
}
