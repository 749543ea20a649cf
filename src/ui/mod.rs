// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one owns its state, handles its own messages and reports side effects
//! to the application root.
//!
//! - [`browser`] - breed selector, image grid and detail panel
//! - [`notifications`] - toast notifications for user feedback
//! - [`styles`] - shared widget styles
//! - [`design_tokens`] - colors, spacing and sizes
//! - [`theming`] - Light/Dark/System theme mode

pub mod browser;
pub mod design_tokens;
pub mod notifications;
pub mod styles;
pub mod theming;
