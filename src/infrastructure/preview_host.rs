// SPDX-License-Identifier: MPL-2.0
//! In-memory host used to run the extension outside a CMS.
//!
//! [`Document`] stores geolocation field values by path, and [`FieldCtx`]
//! is the rendering context handed to a mounted extension for one field.

use crate::application::port::host::RenderFieldExtensionCtx;
use crate::domain::geolocation::Coordinate;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Geolocation field values of one record, keyed by field path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    values: BTreeMap<String, Coordinate>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored value of a field.
    pub fn get(&self, path: &str) -> Option<&Coordinate> {
        self.values.get(path)
    }

    /// Number of fields holding a value.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Serializes the stored values the way the host persists them.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Returns a rendering context bound to `field_path`.
    pub fn field_ctx(&mut self, field_path: impl Into<String>) -> FieldCtx<'_> {
        FieldCtx {
            document: self,
            field_path: field_path.into(),
        }
    }
}

/// Rendering context for one field of a [`Document`].
pub struct FieldCtx<'a> {
    document: &'a mut Document,
    field_path: String,
}

impl RenderFieldExtensionCtx for FieldCtx<'_> {
    fn field_path(&self) -> &str {
        &self.field_path
    }

    fn set_field_value(&mut self, path: &str, value: Coordinate) {
        log::info!("Field '{}' set to {}", path, value.format());
        self.document.values.insert(path.to_string(), value);
    }
}
