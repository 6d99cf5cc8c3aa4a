// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer - Host-side implementations of application ports.
//!
//! - [`preview_host`]: In-memory document implementing
//!   [`RenderFieldExtensionCtx`](crate::application::port::RenderFieldExtensionCtx)

pub mod preview_host;
