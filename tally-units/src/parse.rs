//! Lenient input scanning - free-form text to a base-unit value
//!
//! Parsing is total: malformed input degrades to 0 or to a partial
//! accumulation, never to an error. Tokens that do not resolve to a
//! known unit are skipped and the scan continues.

use tracing::debug;

use crate::catalog::Category;

/// Parse free-form text like "5inch 3mm" into a single value expressed
/// in the category's base unit.
///
/// Input is case-folded and thousands-separator commas are stripped.
/// Each `(number)(unit)` pair contributes `value * factor` to a running
/// total. When the scan finds no pair at all but the entire text is a
/// bare number, that number is returned as-is (it is already in base
/// units). Anything else yields 0.
pub fn parse_to_base(category: &Category, text: &str) -> f64 {
    let text = text.to_lowercase().replace(',', "");

    if category.special {
        return parse_temperature(category, &text);
    }

    let mut total = 0.0;
    let mut saw_pair = false;

    for caps in category.pattern().captures_iter(&text) {
        saw_pair = true;
        let value: f64 = match caps[1].parse() {
            Ok(v) => v,
            Err(_) => continue,
        };
        let Some(id) = category.resolve(&caps[2]) else { continue };
        let Some(unit) = category.unit(id) else { continue };
        debug!(category = category.name, token = %&caps[2], unit = id, value, "accumulate");
        total += value * unit.factor;
    }

    if !saw_pair {
        if let Ok(solo) = text.trim().parse::<f64>() {
            return solo;
        }
    }

    if total.is_finite() {
        total
    } else {
        0.0
    }
}

/// Temperature is non-linear and expects a single value: the first
/// `(number)(letters)` pair decides the scale, defaulting to Celsius.
fn parse_temperature(category: &Category, text: &str) -> f64 {
    if let Some(caps) = category.pattern().captures(text) {
        let Ok(value) = caps[1].parse::<f64>() else { return 0.0 };
        return match &caps[2] {
            "f" => (value - 32.0) * 5.0 / 9.0,
            "k" => value - 273.15,
            _ => value,
        };
    }

    // Bare number, assume Celsius
    text.trim().parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_single_pair() {
        let length = CATALOG.get("Length").unwrap();
        assert!(approx_eq(parse_to_base(length, "5m"), 5000.0));
    }

    #[test]
    fn test_multi_token_accumulation() {
        let length = CATALOG.get("Length").unwrap();
        assert!(approx_eq(parse_to_base(length, "1m 50cm"), 1500.0));
    }

    #[test]
    fn test_concatenated_pairs() {
        let length = CATALOG.get("Length").unwrap();
        assert!(approx_eq(parse_to_base(length, "5inch3mm"), 5.0 * 25.4 + 3.0));
    }

    #[test]
    fn test_alias_matches_canonical() {
        let length = CATALOG.get("Length").unwrap();
        assert!(approx_eq(parse_to_base(length, "5in"), parse_to_base(length, "5inch")));
        assert!(approx_eq(parse_to_base(length, "2\""), parse_to_base(length, "2inch")));
    }

    #[test]
    fn test_longest_match_wins() {
        // "in" is an alias of "inch"; greedy matching must not stop at
        // a shorter token when a longer one fits
        let length = CATALOG.get("Length").unwrap();
        assert!(approx_eq(parse_to_base(length, "5in"), 127.0));
        assert!(approx_eq(parse_to_base(length, "5inch"), 127.0));
    }

    #[test]
    fn test_case_insensitive_and_commas() {
        let length = CATALOG.get("Length").unwrap();
        assert!(approx_eq(parse_to_base(length, "1,000MM"), 1000.0));
    }

    #[test]
    fn test_bare_number_is_base_units() {
        let mass = CATALOG.get("Mass").unwrap();
        assert!(approx_eq(parse_to_base(mass, "5"), 5.0));
    }

    #[test]
    fn test_unrecognized_unit_skipped_without_fallback() {
        // A unit-shaped but unknown token neither errors nor triggers
        // the bare-number path
        let length = CATALOG.get("Length").unwrap();
        assert_eq!(parse_to_base(length, "5xyz"), 0.0);
    }

    #[test]
    fn test_trailing_garbage_ignored() {
        let length = CATALOG.get("Length").unwrap();
        assert!(approx_eq(parse_to_base(length, "5m what else"), 5000.0));
    }

    #[test]
    fn test_empty_and_non_numeric_input() {
        let length = CATALOG.get("Length").unwrap();
        assert_eq!(parse_to_base(length, ""), 0.0);
        assert_eq!(parse_to_base(length, "hello"), 0.0);
    }

    #[test]
    fn test_temperature_fahrenheit() {
        let temp = CATALOG.get("Temperature").unwrap();
        assert!(approx_eq(parse_to_base(temp, "32f"), 0.0));
        assert!(approx_eq(parse_to_base(temp, "212F"), 100.0));
    }

    #[test]
    fn test_temperature_kelvin() {
        let temp = CATALOG.get("Temperature").unwrap();
        assert!(approx_eq(parse_to_base(temp, "273.15k"), 0.0));
    }

    #[test]
    fn test_temperature_negative_value() {
        let temp = CATALOG.get("Temperature").unwrap();
        assert!(approx_eq(parse_to_base(temp, "-40f"), -40.0));
    }

    #[test]
    fn test_temperature_bare_number_is_celsius() {
        let temp = CATALOG.get("Temperature").unwrap();
        assert!(approx_eq(parse_to_base(temp, "30"), 30.0));
    }

    #[test]
    fn test_temperature_unknown_scale_is_celsius() {
        let temp = CATALOG.get("Temperature").unwrap();
        assert!(approx_eq(parse_to_base(temp, "30x"), 30.0));
    }

    #[test]
    fn test_temperature_no_numeric_content() {
        let temp = CATALOG.get("Temperature").unwrap();
        assert_eq!(parse_to_base(temp, "cold"), 0.0);
    }
}
