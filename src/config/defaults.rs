// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration.

use crate::ui::coordinate_form::Variant;

/// Name of the settings file inside the config directory.
pub const CONFIG_FILE: &str = "settings.toml";

/// Form variant attached to geolocation fields when none is configured.
pub const DEFAULT_VARIANT: Variant = Variant::Combined;

/// Locale used when neither CLI, config nor OS yields an available one.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Field path the preview host mounts the extension on.
pub const PREVIEW_FIELD_PATH: &str = "location";
