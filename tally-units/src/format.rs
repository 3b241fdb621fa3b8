//! Display formatting for converted values

/// Format a value for display.
///
/// Tiny non-zero magnitudes (below 1e-4) switch to scientific notation
/// with 4 fractional digits so legitimate conversions do not render as
/// zero; everything else rounds to 4 decimal places with insignificant
/// trailing zeros stripped.
pub fn format_value(value: f64) -> String {
    if value != 0.0 && value.abs() < 1e-4 {
        return format!("{value:.4e}");
    }

    let fixed = format!("{value:.4}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiny_values_use_scientific_notation() {
        assert_eq!(format_value(0.00003), "3.0000e-5");
        assert_eq!(format_value(-0.00003), "-3.0000e-5");
    }

    #[test]
    fn test_threshold_is_exclusive() {
        // Exactly 1e-4 stays in plain notation
        assert_eq!(format_value(0.0001), "0.0001");
        assert_eq!(format_value(0.00009999), "9.9990e-5");
    }

    #[test]
    fn test_rounds_to_four_decimals() {
        assert_eq!(format_value(1234.56789), "1234.5679");
    }

    #[test]
    fn test_strips_trailing_zeros() {
        assert_eq!(format_value(1500.0), "1500");
        assert_eq!(format_value(0.5), "0.5");
        assert_eq!(format_value(2.5000), "2.5");
    }

    #[test]
    fn test_zero_stays_zero() {
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(-0.0), "0");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_value(-1234.56789), "-1234.5679");
    }
}
