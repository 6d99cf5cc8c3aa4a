// SPDX-License-Identifier: MPL-2.0
//! The manual geolocation plugin.
//!
//! Registers the coordinate form as an addon on every `lat_lon` field and
//! mounts it on request. A mounted form forwards committed coordinates to
//! the host through [`RenderFieldExtensionCtx::set_field_value`], once per
//! confirm.

use crate::application::port::host::{
    AddonRef, Field, FieldExtensionHooks, FieldExtensionOverride, FieldType,
    RenderFieldExtensionCtx,
};
use crate::i18n::fluent::I18n;
use crate::ui::coordinate_form::{self, Event, Message, Variant, ViewContext};
use iced::Element;

/// Plugin entry point handed to the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualGeolocation {
    /// Variant attached by [`FieldExtensionHooks::override_field_extensions`].
    variant: Variant,
}

impl ManualGeolocation {
    pub fn new(variant: Variant) -> Self {
        Self { variant }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }
}

impl FieldExtensionHooks for ManualGeolocation {
    type Extension = MountedForm;

    fn override_field_extensions(&self, field: &Field) -> Option<FieldExtensionOverride> {
        if field.field_type != FieldType::LatLon {
            return None;
        }

        Some(FieldExtensionOverride {
            addons: vec![AddonRef {
                id: self.variant.extension_id().to_string(),
            }],
        })
    }

    fn render_field_extension(
        &self,
        extension_id: &str,
        ctx: &dyn RenderFieldExtensionCtx,
    ) -> Option<MountedForm> {
        let variant = Variant::from_extension_id(extension_id)?;
        log::debug!(
            "Mounting {} coordinate form on field '{}'",
            variant,
            ctx.field_path()
        );
        Some(MountedForm {
            form: coordinate_form::State::new(variant),
        })
    }
}

/// A coordinate form mounted on one field.
#[derive(Debug, Clone)]
pub struct MountedForm {
    form: coordinate_form::State,
}

impl MountedForm {
    pub fn state(&self) -> &coordinate_form::State {
        &self.form
    }

    /// Applies a widget message, writing the field through `ctx` on commit.
    pub fn update(&mut self, message: Message, ctx: &mut dyn RenderFieldExtensionCtx) {
        match self.form.update(message) {
            Event::None => {}
            Event::SetCoordinates(coordinate) => {
                let path = ctx.field_path().to_string();
                ctx.set_field_value(&path, coordinate);
            }
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        coordinate_form::view(&self.form, ViewContext { i18n })
    }
}
