// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects. Wire formats
//! live in the infrastructure layer and are converted into these types, so
//! the browser state can be tested without HTTP or UI crates.
//!
//! # Modules
//!
//! - [`catalog`]: Breed filter ([`BreedId`](catalog::BreedId),
//!   [`BreedOption`](catalog::BreedOption)) and image records
//!   ([`ImageSummary`](catalog::ImageSummary), [`ImageDetail`](catalog::ImageDetail),
//!   [`BreedInfo`](catalog::BreedInfo))

pub mod catalog;
