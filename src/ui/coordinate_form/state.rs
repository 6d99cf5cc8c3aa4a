// SPDX-License-Identifier: MPL-2.0
//! State management for the coordinate form.

use super::{Event, Message, Variant};
use crate::domain::error::CoordinateError;
use crate::domain::geolocation::{self, Coordinate};

/// Text currently typed into the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    /// One `"lat, lng"` / `"lat lng"` string.
    Combined(String),
    /// Separate latitude and longitude strings.
    Split { latitude: String, longitude: String },
}

/// Form state. Only raw text is stored; validity is derived on every read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    input: RawInput,
}

impl State {
    /// Creates an empty form for `variant`.
    pub fn new(variant: Variant) -> Self {
        let input = match variant {
            Variant::Combined => RawInput::Combined(String::new()),
            Variant::Split => RawInput::Split {
                latitude: String::new(),
                longitude: String::new(),
            },
        };
        Self { input }
    }

    pub fn variant(&self) -> Variant {
        match self.input {
            RawInput::Combined(_) => Variant::Combined,
            RawInput::Split { .. } => Variant::Split,
        }
    }

    pub fn input(&self) -> &RawInput {
        &self.input
    }

    /// Validates the current text.
    pub fn validate(&self) -> Result<Coordinate, CoordinateError> {
        match &self.input {
            RawInput::Combined(text) => geolocation::parse_combined(text),
            RawInput::Split {
                latitude,
                longitude,
            } => geolocation::parse_pair(latitude, longitude),
        }
    }

    /// Returns true if the confirm action should be enabled.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Applies a widget message and returns the event for the host.
    pub fn update(&mut self, message: Message) -> Event {
        // Input messages meant for the other variant's widgets are dropped.
        match message {
            Message::CoordinatesChanged(value) => {
                if let RawInput::Combined(text) = &mut self.input {
                    *text = value;
                }
                Event::None
            }
            Message::LatitudeChanged(value) => {
                if let RawInput::Split { latitude, .. } = &mut self.input {
                    *latitude = value;
                }
                Event::None
            }
            Message::LongitudeChanged(value) => {
                if let RawInput::Split { longitude, .. } = &mut self.input {
                    *longitude = value;
                }
                Event::None
            }
            Message::Confirm => self.confirm(),
        }
    }

    /// Reads the committed value. Text is left in place after a commit.
    fn confirm(&self) -> Event {
        if let Err(err) = self.validate() {
            log::debug!("Ignoring confirm on invalid coordinates: {err}");
            return Event::None;
        }

        let value = match &self.input {
            RawInput::Combined(text) => geolocation::read_combined(text),
            RawInput::Split {
                latitude,
                longitude,
            } => geolocation::parse_pair(latitude, longitude).ok(),
        };

        match value {
            Some(coordinate) => {
                log::debug!("Committing coordinates {}", coordinate.format());
                Event::SetCoordinates(coordinate)
            }
            None => Event::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_coordinate_eq;

    fn combined(text: &str) -> State {
        let mut state = State::new(Variant::Combined);
        state.update(Message::CoordinatesChanged(text.to_string()));
        state
    }

    fn split(latitude: &str, longitude: &str) -> State {
        let mut state = State::new(Variant::Split);
        state.update(Message::LatitudeChanged(latitude.to_string()));
        state.update(Message::LongitudeChanged(longitude.to_string()));
        state
    }

    #[test]
    fn new_state_is_empty_and_invalid() {
        let state = State::new(Variant::Combined);
        assert_eq!(state.input(), &RawInput::Combined(String::new()));
        assert!(!state.is_valid());

        let state = State::new(Variant::Split);
        assert_eq!(state.variant(), Variant::Split);
        assert!(!state.is_valid());
    }

    #[test]
    fn validity_follows_every_edit() {
        let mut state = State::new(Variant::Combined);
        state.update(Message::CoordinatesChanged("12.34".to_string()));
        assert!(!state.is_valid());

        state.update(Message::CoordinatesChanged("12.34, 114.5".to_string()));
        assert!(state.is_valid());

        state.update(Message::CoordinatesChanged("12.34, 114.5, 3".to_string()));
        assert!(!state.is_valid());
    }

    #[test]
    fn combined_boundaries() {
        assert!(combined("90,180").is_valid());
        assert!(combined("-90,-180").is_valid());
        assert!(!combined("90.0001,0").is_valid());
        assert!(!combined("0,180.0001").is_valid());
    }

    #[test]
    fn variants_disagree_on_range() {
        assert!(split("200", "0").is_valid());
        assert!(!combined("200,0").is_valid());
    }

    #[test]
    fn non_numeric_is_invalid_in_both_variants() {
        assert!(!combined("abc,12").is_valid());
        assert!(!split("abc", "12").is_valid());
    }

    #[test]
    fn confirm_emits_parsed_numbers() {
        let mut state = combined("12.34, 114.5");
        match state.update(Message::Confirm) {
            Event::SetCoordinates(coords) => assert_coordinate_eq(coords, 12.34, 114.5),
            other => panic!("expected SetCoordinates, got {other:?}"),
        }
    }

    #[test]
    fn confirm_split_emits_unchecked_range() {
        let mut state = split(" 200 ", "-74.006");
        assert_eq!(
            state.update(Message::Confirm),
            Event::SetCoordinates(Coordinate::new(200.0, -74.006))
        );
    }

    #[test]
    fn confirm_on_invalid_input_emits_nothing() {
        let mut state = combined("abc,12");
        assert_eq!(state.update(Message::Confirm), Event::None);

        let mut state = split("12", "");
        assert_eq!(state.update(Message::Confirm), Event::None);
    }

    #[test]
    fn text_is_kept_after_confirm() {
        let mut state = combined("1 2");
        let _ = state.update(Message::Confirm);
        assert_eq!(state.input(), &RawInput::Combined("1 2".to_string()));
        assert!(state.is_valid());
    }

    #[test]
    fn messages_for_other_variant_are_ignored() {
        let mut state = State::new(Variant::Combined);
        assert_eq!(
            state.update(Message::LatitudeChanged("12".to_string())),
            Event::None
        );
        assert_eq!(state.input(), &RawInput::Combined(String::new()));

        let mut state = State::new(Variant::Split);
        state.update(Message::CoordinatesChanged("1, 2".to_string()));
        assert!(!state.is_valid());
    }
}
