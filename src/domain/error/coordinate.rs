// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Reasons a raw coordinate input is rejected.
///
/// The form only surfaces a single "invalid" state (a disabled confirm
/// button); the variants exist so callers, logs and tests can tell the
/// causes apart.
#[derive(Debug, Clone, PartialEq)]
pub enum CoordinateError {
    /// The combined input did not split into exactly two tokens.
    WrongTokenCount(usize),

    /// A latitude or longitude component is blank.
    EmptyComponent,

    /// A component has no numeric prefix.
    NotANumber(String),

    /// A component parsed to an infinite value.
    NonFinite,

    /// Latitude outside -90..=90.
    LatitudeOutOfRange(f64),

    /// Longitude outside -180..=180.
    LongitudeOutOfRange(f64),
}

impl CoordinateError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CoordinateError::WrongTokenCount(_) => "error-coordinate-token-count",
            CoordinateError::EmptyComponent => "error-coordinate-empty",
            CoordinateError::NotANumber(_) => "error-coordinate-not-a-number",
            CoordinateError::NonFinite => "error-coordinate-non-finite",
            CoordinateError::LatitudeOutOfRange(_) => "error-coordinate-latitude-range",
            CoordinateError::LongitudeOutOfRange(_) => "error-coordinate-longitude-range",
        }
    }
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateError::WrongTokenCount(count) => {
                write!(f, "Expected 2 values, found {count}")
            }
            CoordinateError::EmptyComponent => write!(f, "Missing latitude or longitude"),
            CoordinateError::NotANumber(token) => write!(f, "Not a number: {token}"),
            CoordinateError::NonFinite => write!(f, "Value is not finite"),
            CoordinateError::LatitudeOutOfRange(value) => {
                write!(f, "Latitude {value} must be between -90 and 90")
            }
            CoordinateError::LongitudeOutOfRange(value) => {
                write!(f, "Longitude {value} must be between -180 and 180")
            }
        }
    }
}

impl std::error::Error for CoordinateError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_offending_value() {
        let err = CoordinateError::LatitudeOutOfRange(91.5);
        assert!(format!("{}", err).contains("91.5"));

        let err = CoordinateError::NotANumber("abc".to_string());
        assert_eq!(format!("{}", err), "Not a number: abc");
    }

    #[test]
    fn i18n_keys_are_distinct() {
        let errors = [
            CoordinateError::WrongTokenCount(3),
            CoordinateError::EmptyComponent,
            CoordinateError::NotANumber(String::new()),
            CoordinateError::NonFinite,
            CoordinateError::LatitudeOutOfRange(0.0),
            CoordinateError::LongitudeOutOfRange(0.0),
        ];
        let mut keys: Vec<_> = errors.iter().map(CoordinateError::i18n_key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), errors.len());
    }
}
