// SPDX-License-Identifier: MPL-2.0
//! Coordinate input form rendered as a geolocation field addon.
//!
//! Two variants exist:
//!
//! - [`Variant::Combined`]: one text input taking `"lat, lng"` or `"lat lng"`,
//!   range-checked against -90..=90 / -180..=180, with an inline format hint.
//! - [`Variant::Split`]: separate latitude and longitude inputs, checked for
//!   finiteness only.
//!
//! The confirm button is enabled exactly when the current text is valid.
//! Confirming emits [`Event::SetCoordinates`], which the mounting host turns
//! into a single field-value write.

pub mod state;
pub mod view;

pub use state::{RawInput, State};
pub use view::{view, ViewContext};

use crate::domain::geolocation::Coordinate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Extension id of the combined single-input form.
pub const COMBINED_EXTENSION_ID: &str = "manualGeolocation";

/// Extension id of the two-input form.
pub const SPLIT_EXTENSION_ID: &str = "manualGeolocationSplit";

/// Which input layout the form uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// One combined `"lat, lng"` input.
    #[default]
    Combined,
    /// Separate latitude and longitude inputs.
    Split,
}

impl Variant {
    /// Returns the host extension id registered for this variant.
    pub const fn extension_id(self) -> &'static str {
        match self {
            Variant::Combined => COMBINED_EXTENSION_ID,
            Variant::Split => SPLIT_EXTENSION_ID,
        }
    }

    /// Looks up the variant registered under a host extension id.
    pub fn from_extension_id(id: &str) -> Option<Self> {
        match id {
            COMBINED_EXTENSION_ID => Some(Variant::Combined),
            SPLIT_EXTENSION_ID => Some(Variant::Split),
            _ => None,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Combined => write!(f, "combined"),
            Variant::Split => write!(f, "split"),
        }
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "combined" => Ok(Variant::Combined),
            "split" => Ok(Variant::Split),
            other => Err(format!("unknown form variant '{other}' (expected combined or split)")),
        }
    }
}

/// Messages emitted by the form widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// The combined input changed.
    CoordinatesChanged(String),
    /// The latitude input changed.
    LatitudeChanged(String),
    /// The longitude input changed.
    LongitudeChanged(String),
    /// The confirm button was pressed or the form was submitted.
    Confirm,
}

/// Events propagated to the mounting host.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// No action needed.
    None,
    /// Write this coordinate into the field.
    SetCoordinates(Coordinate),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_ids_round_trip() {
        for variant in [Variant::Combined, Variant::Split] {
            assert_eq!(Variant::from_extension_id(variant.extension_id()), Some(variant));
        }
        assert_eq!(Variant::from_extension_id("somethingElse"), None);
    }

    #[test]
    fn variant_parses_cli_names() {
        assert_eq!("combined".parse::<Variant>(), Ok(Variant::Combined));
        assert_eq!(" Split ".parse::<Variant>(), Ok(Variant::Split));
        assert!("both".parse::<Variant>().is_err());
    }
}
