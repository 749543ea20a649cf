// SPDX-License-Identifier: MPL-2.0
//! Core catalog types for the domain layer.
//!
//! These types represent pure data without any presentation or transport
//! dependencies.

use std::fmt;

/// Breed identifier used as the search filter (e.g. `beng`).
///
/// Any string is accepted: identifiers outside the configured set are sent
/// to the server verbatim, which simply returns no or unrelated results.
///
/// # Example
///
/// ```
/// use cat_lens::domain::catalog::BreedId;
///
/// let breed = BreedId::new("siam");
/// assert_eq!(breed.as_str(), "siam");
/// assert_eq!(breed.to_string(), "siam");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BreedId(String);

impl BreedId {
    /// Creates a breed identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as sent in the `breed_ids` query parameter.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BreedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A selectable breed: identifier plus the label shown to the user.
///
/// `Display` renders the label, which is what selector widgets show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreedOption {
    pub id: BreedId,
    pub label: String,
}

impl BreedOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: BreedId::new(id),
            label: label.into(),
        }
    }
}

impl fmt::Display for BreedOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// One image returned by a search, in server order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSummary {
    /// Server-assigned identifier, used for detail lookups.
    pub id: String,
    /// Full-size image URL.
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Breed description attached to an image by the server.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BreedInfo {
    pub name: String,
    pub temperament: String,
    pub origin: String,
    pub life_span: String,
    /// Reference article, when the server has one.
    pub wikipedia_url: Option<String>,
}

/// Extended metadata for a single image.
///
/// Fetched on demand and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDetail {
    pub id: String,
    pub width: u32,
    pub height: u32,
    /// Present only when the server has breed-tagged this image.
    pub breed: Option<BreedInfo>,
}

impl ImageDetail {
    /// Returns `(width, height)` in pixels.
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Result of a per-image lookup.
///
/// Lookups never fail outward: any transport or server error collapses into
/// [`DetailOutcome::Unavailable`] so the caller can show a fallback message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailOutcome {
    Found(ImageDetail),
    Unavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breed_option_displays_label() {
        let option = BreedOption::new("pers", "Persian");
        assert_eq!(option.to_string(), "Persian");
        assert_eq!(option.id.as_str(), "pers");
    }

    #[test]
    fn breed_ids_compare_by_value() {
        assert_eq!(BreedId::new("beng"), BreedId::new(String::from("beng")));
        assert_ne!(BreedId::new("beng"), BreedId::new("siam"));
    }

    #[test]
    fn image_detail_dimensions() {
        let detail = ImageDetail {
            id: "abc".into(),
            width: 640,
            height: 480,
            breed: None,
        };
        assert_eq!(detail.dimensions(), (640, 480));
    }
}
