// SPDX-License-Identifier: MPL-2.0
//! Breed-filtered image browser.
//!
//! - [`state`] - state record, transitions and the render model
//! - [`component`] - message routing and async task wiring
//! - [`detail`] - detail panel shown over the grid

pub mod component;
pub mod detail;
pub mod state;
mod view;

pub use component::{Browser, Effect, Message, ViewContext};
pub use state::{Layout, LoadState, State};
