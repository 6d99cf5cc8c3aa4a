// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) the host side implements
//! - [`extension`]: The plugin that registers and mounts the coordinate form
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Hosts (infrastructure) implement application layer ports
//! - Presentation layer renders what the application layer mounts
//!
//! # Example
//!
//! ```
//! use manual_geolocation::application::extension::ManualGeolocation;
//! use manual_geolocation::application::port::{Field, FieldExtensionHooks, FieldType};
//!
//! let plugin = ManualGeolocation::default();
//! let field = Field::new("location", FieldType::LatLon);
//! assert!(plugin.override_field_extensions(&field).is_some());
//! ```

pub mod extension;
pub mod port;
