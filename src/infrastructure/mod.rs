// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module wraps external services and converts their wire formats into
//! domain types.
//!
//! # Available Adapters
//!
//! - [`cat_api`]: TheCatAPI search, detail and image downloads over `reqwest`

pub mod cat_api;

pub use cat_api::CatApiClient;
