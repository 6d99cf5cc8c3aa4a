// SPDX-License-Identifier: MPL-2.0
//! Preview host: runs the plugin against an in-memory document.
//!
//! The `App` plays the CMS host's part. At startup it asks the plugin which
//! addons belong on a geolocation field, mounts the first one, and routes
//! widget messages to it together with a rendering context bound to the
//! document. Committed coordinates land in the document and are shown below
//! the form.

mod message;
pub mod paths;
mod view;

pub use message::{Flags, Message};

use crate::application::extension::{ManualGeolocation, MountedForm};
use crate::application::port::{Field, FieldExtensionHooks, FieldType};
use crate::config::{self, PREVIEW_FIELD_PATH};
use crate::domain::geolocation::Coordinate;
use crate::i18n::fluent::I18n;
use crate::infrastructure::preview_host::Document;
use iced::{window, Element, Task};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    plugin: ManualGeolocation,
    field: Field,
    document: Document,
    /// Extension mounted on `field`, if the plugin attached one.
    extension: Option<MountedForm>,
    /// i18n key of a config load warning to display.
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("variant", &self.plugin.variant())
            .field("field", &self.field.api_key)
            .field("has_extension", &self.extension.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 720.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 360.0;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(480.0, 280.0)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an Fn boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .run()
}

/// Asks `plugin` for the addons of `field` and mounts the first one it owns.
pub fn mount_extension(
    plugin: &ManualGeolocation,
    field: &Field,
    document: &mut Document,
) -> Option<MountedForm> {
    let overrides = plugin.override_field_extensions(field)?;
    let ctx = document.field_ctx(&field.api_key);
    overrides
        .addons
        .iter()
        .find_map(|addon| plugin.render_field_extension(&addon.id, &ctx))
}

impl App {
    /// Initializes application state from CLI flags and persisted config.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);
        let (config, config_warning) = config::load();

        let variant = flags.variant.unwrap_or(config.extension.variant);
        let i18n = I18n::new(flags.lang, &config);
        let plugin = ManualGeolocation::new(variant);
        let field = Field::new(PREVIEW_FIELD_PATH, FieldType::LatLon);
        let mut document = Document::new();
        let extension = mount_extension(&plugin, &field, &mut document);

        log::info!(
            "Previewing {} form on field '{}' ({})",
            variant,
            field.api_key,
            i18n.current_locale()
        );

        let app = Self {
            i18n,
            plugin,
            field,
            document,
            extension,
            config_warning,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Extension(form_message) => {
                if let Some(extension) = self.extension.as_mut() {
                    let mut ctx = self.document.field_ctx(&self.field.api_key);
                    extension.update(form_message, &mut ctx);
                }
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            field: &self.field,
            document: &self.document,
            extension: self.extension.as_ref(),
            config_warning: self.config_warning.as_deref(),
        })
    }

    /// Current stored value of the previewed field.
    pub fn field_value(&self) -> Option<&Coordinate> {
        self.document.get(&self.field.api_key)
    }
}
