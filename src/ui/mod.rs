// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `State`, a `Message` enum, an `Event` enum returned from
//! `update`, and a `view` function taking a `ViewContext`.
//!
//! - [`coordinate_form`] - Manual latitude/longitude input form
//! - [`styles`] - Centralized widget styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod coordinate_form;
pub mod design_tokens;
pub mod styles;
