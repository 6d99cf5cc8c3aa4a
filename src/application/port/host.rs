// SPDX-License-Identifier: MPL-2.0
//! Host CMS port definitions.
//!
//! The content-management host owns the plugin lifecycle: it asks each
//! registered plugin which addons to attach to a field, then asks it to
//! render an addon by id, handing over a rendering context through which
//! the addon writes the field value back.
//!
//! Hosts (including the in-process preview host) implement
//! [`RenderFieldExtensionCtx`]; plugins implement [`FieldExtensionHooks`].

use crate::domain::geolocation::Coordinate;
use serde::{Deserialize, Serialize};

// =============================================================================
// Field descriptors
// =============================================================================

/// Declared type of a content field, as named by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Geolocation field storing `{latitude, longitude}`.
    LatLon,
    String,
    Text,
    Integer,
    Float,
    Boolean,
    Json,
    /// Any field type this plugin does not know about.
    #[serde(other)]
    Unknown,
}

/// A content field as described by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Field identifier inside its model.
    pub api_key: String,
    /// Declared type of the field.
    pub field_type: FieldType,
}

impl Field {
    pub fn new(api_key: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            api_key: api_key.into(),
            field_type,
        }
    }
}

/// Reference to an addon the host should render below a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddonRef {
    /// Extension id later passed back to
    /// [`FieldExtensionHooks::render_field_extension`].
    pub id: String,
}

/// Extensions a plugin attaches to a field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldExtensionOverride {
    pub addons: Vec<AddonRef>,
}

// =============================================================================
// Rendering context
// =============================================================================

/// Context the host supplies when rendering a field extension.
pub trait RenderFieldExtensionCtx {
    /// Path of the field being rendered (e.g. `"location"` or
    /// `"blocks.0.location"`).
    fn field_path(&self) -> &str;

    /// Writes `value` into the document field at `path`.
    fn set_field_value(&mut self, path: &str, value: Coordinate);
}

// =============================================================================
// Plugin hooks
// =============================================================================

/// Hooks a plugin registers with the host.
pub trait FieldExtensionHooks {
    /// Mounted UI component returned by
    /// [`render_field_extension`](Self::render_field_extension).
    type Extension;

    /// Returns the addons to attach to `field`, or `None` to leave it alone.
    fn override_field_extensions(&self, field: &Field) -> Option<FieldExtensionOverride>;

    /// Mounts the extension registered under `extension_id`.
    ///
    /// Returns `None` for ids this plugin does not own.
    fn render_field_extension(
        &self,
        extension_id: &str,
        ctx: &dyn RenderFieldExtensionCtx,
    ) -> Option<Self::Extension>;
}
