// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! - [`host`]: The CMS host contract (field descriptors, rendering context,
//!   plugin hooks)

pub mod host;

pub use host::{
    AddonRef, Field, FieldExtensionHooks, FieldExtensionOverride, FieldType,
    RenderFieldExtensionCtx,
};
