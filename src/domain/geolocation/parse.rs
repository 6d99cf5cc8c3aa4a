// SPDX-License-Identifier: MPL-2.0
//! Parsing and validation of manually entered coordinates.
//!
//! Two input shapes are supported:
//!
//! - **Combined**: one string holding both values, e.g. `"12.34, 114.5"`,
//!   `"12.34,114.5"` or `"12.34 114.5"`. Validated against the WGS84 ranges.
//! - **Pair**: separate latitude and longitude strings. Only finiteness is
//!   checked; out-of-range values such as latitude `200` are accepted.
//!
//! Validity is always derived from the raw text; nothing here caches it.

use super::types::{Coordinate, LATITUDE_RANGE, LONGITUDE_RANGE};
use crate::domain::error::CoordinateError;

/// Splits a combined input into its non-empty, trimmed tokens.
///
/// A comma takes precedence: `"12.34, 114.5"` splits on the comma even
/// though it also contains a space. Without a comma the input splits on
/// whitespace.
pub fn split_tokens(input: &str) -> Vec<&str> {
    let raw: Box<dyn Iterator<Item = &str>> = if input.contains(',') {
        Box::new(input.split(','))
    } else {
        Box::new(input.split_whitespace())
    };

    raw.map(str::trim).filter(|token| !token.is_empty()).collect()
}

/// Reads the longest decimal-literal prefix of `token`.
///
/// Mirrors the lenient number reading CMS front-ends apply to text inputs:
/// leading whitespace is skipped, an optional sign is accepted, then either
/// `Infinity` or digits with an optional fraction and exponent. Anything
/// after that prefix is ignored, so `"12abc"` reads as `12`. Returns `None`
/// when no prefix qualifies.
pub fn parse_float(token: &str) -> Option<f64> {
    let s = token.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        let negative = bytes.first() == Some(&b'-');
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        // A lone trailing dot still belongs to the literal ("5." is 5).
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Parses one component: non-blank, numeric and finite.
fn parse_component(token: &str) -> Result<f64, CoordinateError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(CoordinateError::EmptyComponent);
    }

    let value = parse_float(token).ok_or_else(|| CoordinateError::NotANumber(token.to_string()))?;
    if !value.is_finite() {
        return Err(CoordinateError::NonFinite);
    }

    Ok(value)
}

/// Parses and validates a combined `"lat, lng"` / `"lat lng"` input.
///
/// Requires exactly two tokens, both finite, with latitude in -90..=90 and
/// longitude in -180..=180.
pub fn parse_combined(input: &str) -> Result<Coordinate, CoordinateError> {
    let tokens = split_tokens(input);
    let [lat, lng] = tokens.as_slice() else {
        return Err(CoordinateError::WrongTokenCount(tokens.len()));
    };

    let latitude = parse_component(lat)?;
    let longitude = parse_component(lng)?;

    if !LATITUDE_RANGE.contains(&latitude) {
        return Err(CoordinateError::LatitudeOutOfRange(latitude));
    }
    if !LONGITUDE_RANGE.contains(&longitude) {
        return Err(CoordinateError::LongitudeOutOfRange(longitude));
    }

    Ok(Coordinate::new(latitude, longitude))
}

/// Parses and validates separate latitude and longitude inputs.
///
/// Only requires both values to be present and finite: no range check.
pub fn parse_pair(latitude: &str, longitude: &str) -> Result<Coordinate, CoordinateError> {
    let latitude = parse_component(latitude)?;
    let longitude = parse_component(longitude)?;
    Ok(Coordinate::new(latitude, longitude))
}

/// Reads the two tokens of a combined input as numbers, without range checks.
///
/// This is the commit-time reading: the confirm control is only enabled
/// once [`parse_combined`] succeeded for the same text. Returns `None` when
/// the input does not hold exactly two numeric tokens.
pub fn read_combined(input: &str) -> Option<Coordinate> {
    let tokens = split_tokens(input);
    let [lat, lng] = tokens.as_slice() else {
        return None;
    };
    Some(Coordinate::new(parse_float(lat)?, parse_float(lng)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn comma_takes_precedence_over_spaces() {
        assert_eq!(split_tokens("12.34, 114.5"), vec!["12.34", "114.5"]);
        assert_eq!(split_tokens("12.34,114.5"), vec!["12.34", "114.5"]);
        assert_eq!(split_tokens("12.34 114.5"), vec!["12.34", "114.5"]);
        assert_eq!(split_tokens("  12.34\t114.5  "), vec!["12.34", "114.5"]);
    }

    #[test]
    fn empty_tokens_are_discarded() {
        assert_eq!(split_tokens("12,,34"), vec!["12", "34"]);
        assert_eq!(split_tokens(" , 12 , "), vec!["12"]);
        assert!(split_tokens("").is_empty());
        assert!(split_tokens("   ").is_empty());
    }

    #[test]
    fn comma_split_keeps_inner_spaces_in_token() {
        // "1 2, 3" splits on the comma, so the first token is "1 2".
        assert_eq!(split_tokens("1 2, 3"), vec!["1 2", "3"]);
    }

    #[test]
    fn parse_float_reads_decimal_literals() {
        assert_eq!(parse_float("12.34"), Some(12.34));
        assert_eq!(parse_float("-90"), Some(-90.0));
        assert_eq!(parse_float("+5"), Some(5.0));
        assert_eq!(parse_float(".5"), Some(0.5));
        assert_eq!(parse_float("5."), Some(5.0));
        assert_eq!(parse_float("1e3"), Some(1000.0));
        assert_eq!(parse_float("2.5E-1"), Some(0.25));
        assert_eq!(parse_float("  7"), Some(7.0));
    }

    #[test]
    fn parse_float_ignores_trailing_garbage() {
        assert_eq!(parse_float("12abc"), Some(12.0));
        assert_eq!(parse_float("1e"), Some(1.0));
        assert_eq!(parse_float("1e+"), Some(1.0));
        assert_eq!(parse_float("3.5.1"), Some(3.5));
        assert_eq!(parse_float("0x10"), Some(0.0));
    }

    #[test]
    fn parse_float_rejects_non_numeric() {
        assert_eq!(parse_float("abc"), None);
        assert_eq!(parse_float(""), None);
        assert_eq!(parse_float("-"), None);
        assert_eq!(parse_float("."), None);
        assert_eq!(parse_float("NaN"), None);
        assert_eq!(parse_float("inf"), None);
    }

    #[test]
    fn parse_float_reads_infinity_literal() {
        assert_eq!(parse_float("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_float("-Infinity"), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn combined_accepts_in_range_pairs() {
        let coords = parse_combined("12.34, 114.5").expect("valid");
        assert_abs_diff_eq!(coords.latitude, 12.34);
        assert_abs_diff_eq!(coords.longitude, 114.5);

        assert!(parse_combined("12.34 114.5").is_ok());
        assert!(parse_combined("12.34,114.5").is_ok());
    }

    #[test]
    fn combined_boundaries() {
        assert!(parse_combined("90,180").is_ok());
        assert!(parse_combined("-90,-180").is_ok());
        assert_eq!(
            parse_combined("90.0001,0"),
            Err(CoordinateError::LatitudeOutOfRange(90.0001))
        );
        assert_eq!(
            parse_combined("0,180.0001"),
            Err(CoordinateError::LongitudeOutOfRange(180.0001))
        );
    }

    #[test]
    fn combined_rejects_wrong_token_count() {
        assert_eq!(parse_combined(""), Err(CoordinateError::WrongTokenCount(0)));
        assert_eq!(parse_combined("12"), Err(CoordinateError::WrongTokenCount(1)));
        assert_eq!(
            parse_combined("1, 2, 3"),
            Err(CoordinateError::WrongTokenCount(3))
        );
        assert_eq!(
            parse_combined("1 2 3"),
            Err(CoordinateError::WrongTokenCount(3))
        );
    }

    #[test]
    fn combined_rejects_non_numeric_and_non_finite() {
        assert_eq!(
            parse_combined("abc,12"),
            Err(CoordinateError::NotANumber("abc".to_string()))
        );
        assert_eq!(
            parse_combined("Infinity,0"),
            Err(CoordinateError::NonFinite)
        );
        assert_eq!(
            parse_combined("1 2, 3").map(|c| c.latitude),
            Ok(1.0),
            "prefix reading applies to each comma token"
        );
    }

    #[test]
    fn combined_rejects_out_of_range_latitude() {
        assert!(parse_combined("200,0").is_err());
    }

    #[test]
    fn pair_skips_range_checks() {
        let coords = parse_pair("200", "0").expect("no range check");
        assert_abs_diff_eq!(coords.latitude, 200.0);
        assert!(parse_pair(" 12.5 ", "-500").is_ok());
    }

    #[test]
    fn pair_requires_both_values() {
        assert_eq!(parse_pair("", "12"), Err(CoordinateError::EmptyComponent));
        assert_eq!(parse_pair("12", "   "), Err(CoordinateError::EmptyComponent));
    }

    #[test]
    fn pair_rejects_non_numeric_and_non_finite() {
        assert_eq!(
            parse_pair("abc", "12"),
            Err(CoordinateError::NotANumber("abc".to_string()))
        );
        assert_eq!(parse_pair("1", "-Infinity"), Err(CoordinateError::NonFinite));
    }

    #[test]
    fn read_combined_matches_validated_parse() {
        for input in ["12.34, 114.5", "12.34 114.5", "-90,-180", "90,180"] {
            assert_eq!(read_combined(input), parse_combined(input).ok());
        }
    }

    #[test]
    fn read_combined_needs_two_numeric_tokens() {
        assert_eq!(read_combined("12"), None);
        assert_eq!(read_combined("abc, 12"), None);
    }
}
