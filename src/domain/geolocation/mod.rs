// SPDX-License-Identifier: MPL-2.0
//! Geolocation domain: the [`Coordinate`] value and the rules for reading
//! one from manually typed text.

mod parse;
mod types;

pub use parse::{parse_combined, parse_float, parse_pair, read_combined, split_tokens};
pub use types::{Coordinate, LATITUDE_RANGE, LONGITUDE_RANGE};
