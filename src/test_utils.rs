// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Re-exports the `approx` assertion macros, which handle floating-point
//! precision issues that `assert_eq!` cannot.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use crate::domain::geolocation::Coordinate;

/// Default epsilon for degree comparisons.
pub const F64_EPSILON: f64 = 1e-10;

/// Asserts that `actual` is within [`F64_EPSILON`] of `(latitude, longitude)`.
#[track_caller]
pub fn assert_coordinate_eq(actual: Coordinate, latitude: f64, longitude: f64) {
    assert_abs_diff_eq!(actual.latitude, latitude, epsilon = F64_EPSILON);
    assert_abs_diff_eq!(actual.longitude, longitude, epsilon = F64_EPSILON);
}
