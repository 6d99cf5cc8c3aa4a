// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::{Error, Result};
use crate::ui::coordinate_form::{self, Variant};

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Message from the mounted field extension.
    Extension(coordinate_form::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, PartialEq)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional form variant, overriding `[extension] variant` from the config.
    pub variant: Option<Variant>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `MANUAL_GEOLOCATION_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}

impl Flags {
    /// Reads flags from parsed command-line arguments.
    ///
    /// Unknown or positional arguments are rejected.
    pub fn from_args(mut args: pico_args::Arguments) -> Result<Self> {
        let flags = Self {
            lang: args.opt_value_from_str("--lang")?,
            variant: args.opt_value_from_str("--variant")?,
            config_dir: args.opt_value_from_str("--config-dir")?,
        };

        let remaining = args.finish();
        if !remaining.is_empty() {
            return Err(Error::Cli(format!(
                "unexpected arguments: {}",
                remaining
                    .iter()
                    .map(|arg| arg.to_string_lossy())
                    .collect::<Vec<_>>()
                    .join(" ")
            )));
        }

        Ok(flags)
    }
}
