/// Number of decimal places kept on every published float. The dashboard accepts up to six.
pub const DECIMAL_PLACES: i32 = 3;

/// Round a value to [`DECIMAL_PLACES`] decimal places, half away from zero.
#[must_use]
pub fn round_to_precision(value: f64) -> f64 {
    let scale = 10_f64.powi(DECIMAL_PLACES);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-12, "expected {expected}, got {actual}");
    }

    #[test]
    fn test_truncates_long_fraction() {
        assert_close(round_to_precision(0.123_456_789), 0.123);
    }

    #[test]
    fn test_rounds_up() {
        assert_close(round_to_precision(0.675_675_675), 0.676);
    }

    #[test]
    fn test_keeps_short_values() {
        assert_close(round_to_precision(30.0), 30.0);
        assert_close(round_to_precision(0.5), 0.5);
        assert_close(round_to_precision(0.0), 0.0);
    }

    #[test]
    fn test_negative_values() {
        assert_close(round_to_precision(-1.234_56), -1.235);
    }
}
