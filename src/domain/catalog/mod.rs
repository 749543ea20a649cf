// SPDX-License-Identifier: MPL-2.0
//! Cat catalog domain types.
//!
//! - [`BreedId`] / [`BreedOption`]: the breed filter driving searches
//! - [`ImageSummary`]: one search result
//! - [`ImageDetail`] / [`BreedInfo`]: extended metadata for a single image
//! - [`DetailOutcome`]: found detail or the "unavailable" fallback

mod types;

pub use types::{BreedId, BreedInfo, BreedOption, DetailOutcome, ImageDetail, ImageSummary};
