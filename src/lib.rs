// SPDX-License-Identifier: MPL-2.0
//! `cat_lens` is a small cat picture browser built with the Iced GUI framework.
//!
//! Pick a breed, browse a grid of pictures from TheCatAPI and click one to
//! see what the server knows about it. The crate is split into:
//!
//! - [`domain`] - catalog types without transport or UI dependencies
//! - [`infrastructure`] - the HTTP client for TheCatAPI
//! - [`ui`] - the browser component, toasts, styles and theming
//! - [`app`] - the Iced application root
//! - [`config`], [`i18n`], [`error`] - ambient support

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
