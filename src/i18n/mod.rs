// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Embedded `.ftl` translation files (`assets/i18n/`)
//! - Runtime language switching
//! - Fallback to `en-US` when no preferred locale is available

pub mod fluent;
