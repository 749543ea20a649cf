// SPDX-License-Identifier: MPL-2.0
//! Wire format of TheCatAPI responses.
//!
//! Only the fields the browser uses are declared; everything else in the
//! payload is ignored.

use crate::domain::catalog::{BreedInfo, ImageDetail, ImageSummary};
use serde::Deserialize;

/// Element of the search endpoint's JSON array.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchItemDto {
    id: String,
    url: String,
    #[serde(default)]
    width: Option<u32>,
    #[serde(default)]
    height: Option<u32>,
}

impl From<SearchItemDto> for ImageSummary {
    fn from(dto: SearchItemDto) -> Self {
        ImageSummary {
            id: dto.id,
            url: dto.url,
            width: dto.width,
            height: dto.height,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct BreedDto {
    #[serde(default)]
    name: String,
    #[serde(default)]
    temperament: String,
    #[serde(default)]
    origin: String,
    #[serde(default)]
    life_span: String,
    #[serde(default)]
    wikipedia_url: Option<String>,
}

impl From<BreedDto> for BreedInfo {
    fn from(dto: BreedDto) -> Self {
        BreedInfo {
            name: dto.name,
            temperament: dto.temperament,
            origin: dto.origin,
            life_span: dto.life_span,
            wikipedia_url: dto.wikipedia_url.filter(|url| !url.is_empty()),
        }
    }
}

/// Body of the single-image endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct DetailDto {
    id: String,
    width: u32,
    height: u32,
    #[serde(default)]
    breeds: Vec<BreedDto>,
}

impl From<DetailDto> for ImageDetail {
    fn from(dto: DetailDto) -> Self {
        ImageDetail {
            id: dto.id,
            width: dto.width,
            height: dto.height,
            // Only the first breed entry is meaningful for a single photo.
            breed: dto.breeds.into_iter().next().map(BreedInfo::from),
        }
    }
}

/// Parses a search response body, preserving server order.
pub(crate) fn parse_search(body: &[u8]) -> serde_json::Result<Vec<ImageSummary>> {
    let items: Vec<SearchItemDto> = serde_json::from_slice(body)?;
    Ok(items.into_iter().map(ImageSummary::from).collect())
}

/// Parses a detail response body.
pub(crate) fn parse_detail(body: &[u8]) -> serde_json::Result<ImageDetail> {
    let dto: DetailDto = serde_json::from_slice(body)?;
    Ok(dto.into())
}
