// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with no UI or host dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! Besides `std` it only relies on `serde` derives so values can cross the
//! host boundary unchanged.
//!
//! # Modules
//!
//! - [`error`]: Domain error types ([`CoordinateError`](error::CoordinateError))
//! - [`geolocation`]: Coordinate value and parsing rules
//!   ([`Coordinate`](geolocation::Coordinate), [`parse_combined`](geolocation::parse_combined),
//!   [`parse_pair`](geolocation::parse_pair))

pub mod error;
pub mod geolocation;
