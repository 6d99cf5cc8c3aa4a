// SPDX-License-Identifier: MPL-2.0
//! Geolocation domain types.
//!
//! Pure value types with no UI or host dependencies.

use serde::{Deserialize, Serialize};

/// Valid latitude range in decimal degrees.
pub const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;

/// Valid longitude range in decimal degrees.
pub const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

// =============================================================================
// Coordinate
// =============================================================================

/// A latitude/longitude pair in decimal degrees.
///
/// This is the value written into a geolocation field. It serializes as
/// `{ latitude = <number>, longitude = <number> }`.
///
/// Unlike a clamped GPS reading, a `Coordinate` keeps exactly what was
/// entered: the two-field form accepts values outside the WGS84 ranges, so
/// range checks are explicit via [`Coordinate::is_in_range`].
///
/// # Example
///
/// ```
/// use manual_geolocation::domain::geolocation::Coordinate;
///
/// let paris = Coordinate::new(48.8566, 2.3522);
/// assert!(paris.is_in_range());
/// assert_eq!(paris.format(), "48.856600° N, 2.352200° E");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate without clamping or validation.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns whether both components are finite (not NaN or infinite).
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Returns whether the coordinate is finite and inside the WGS84 ranges.
    #[must_use]
    pub fn is_in_range(&self) -> bool {
        self.is_finite()
            && LATITUDE_RANGE.contains(&self.latitude)
            && LONGITUDE_RANGE.contains(&self.longitude)
    }

    /// Formats the coordinate with hemisphere letters.
    ///
    /// Format: "48.856600° N, 2.352200° E"
    #[must_use]
    pub fn format(&self) -> String {
        let lat_dir = if self.latitude >= 0.0 { "N" } else { "S" };
        let lon_dir = if self.longitude >= 0.0 { "E" } else { "W" };
        format!(
            "{:.6}° {}, {:.6}° {}",
            self.latitude.abs(),
            lat_dir,
            self.longitude.abs(),
            lon_dir
        )
    }

    /// Returns an OpenStreetMap URL centered on this coordinate.
    #[must_use]
    pub fn map_url(&self) -> String {
        format!(
            "https://www.openstreetmap.org/?mlat={}&mlon={}",
            self.latitude, self.longitude
        )
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn new_keeps_values_unclamped() {
        let coords = Coordinate::new(200.0, -300.0);
        assert_abs_diff_eq!(coords.latitude, 200.0);
        assert_abs_diff_eq!(coords.longitude, -300.0);
        assert!(!coords.is_in_range());
        assert!(coords.is_finite());
    }

    #[test]
    fn range_bounds_are_inclusive() {
        assert!(Coordinate::new(90.0, 180.0).is_in_range());
        assert!(Coordinate::new(-90.0, -180.0).is_in_range());
        assert!(!Coordinate::new(90.0001, 0.0).is_in_range());
        assert!(!Coordinate::new(0.0, 180.0001).is_in_range());
    }

    #[test]
    fn non_finite_is_never_in_range() {
        assert!(!Coordinate::new(f64::NAN, 0.0).is_finite());
        assert!(!Coordinate::new(0.0, f64::INFINITY).is_in_range());
    }

    #[test]
    fn format_uses_hemispheres() {
        let sydney = Coordinate::new(-33.8688, 151.2093);
        assert_eq!(sydney.format(), "33.868800° S, 151.209300° E");

        let nyc = Coordinate::new(40.7128, -74.0060);
        assert_eq!(nyc.format(), "40.712800° N, 74.006000° W");
    }

    #[test]
    fn map_url_contains_both_components() {
        let url = Coordinate::new(48.8566, 2.3522).map_url();
        assert!(url.contains("mlat=48.8566"));
        assert!(url.contains("mlon=2.3522"));
    }

    #[test]
    fn serializes_as_numbers() {
        let content = toml::to_string(&Coordinate::new(12.34, 114.5)).expect("serialize");
        assert!(content.contains("latitude = 12.34"));
        assert!(content.contains("longitude = 114.5"));
        assert!(!content.contains('"'));
    }
}
