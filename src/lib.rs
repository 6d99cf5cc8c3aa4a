// SPDX-License-Identifier: MPL-2.0
//! `manual_geolocation` is a CMS field extension for entering latitude and
//! longitude by hand.
//!
//! A geolocation field gets a small form, either one combined text input
//! (`"12.34, 114.5"`) or separate latitude and longitude inputs. The confirm
//! button stays disabled until the text parses to a valid coordinate; on
//! confirm the value is written to the host field. A preview host built with
//! Iced runs the extension against an in-memory document.

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
