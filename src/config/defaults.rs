// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **API**: Endpoints and page size of TheCatAPI
//! - **Browser**: Initial breed, known breeds and grid layout

// ==========================================================================
// API Defaults
// ==========================================================================

/// Image search endpoint. Query parameters are appended per request.
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://api.thecatapi.com/v1/images/search";

/// Base endpoint for single-image lookups (`{endpoint}/{id}`).
pub const DEFAULT_IMAGE_ENDPOINT: &str = "https://api.thecatapi.com/v1/images";

/// Number of images requested per search.
pub const DEFAULT_PAGE_LIMIT: u32 = 20;

/// Minimum page size accepted from the config file.
pub const MIN_PAGE_LIMIT: u32 = 1;

/// Maximum page size accepted by the API.
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Environment variable that overrides the configured API key.
pub const ENV_API_KEY: &str = "CAT_LENS_API_KEY";

// ==========================================================================
// Browser Defaults
// ==========================================================================

/// Breed selected when the application starts.
pub const DEFAULT_BREED: &str = "beng";

/// Breeds offered by the selector: (API identifier, display label).
pub const DEFAULT_BREEDS: [(&str, &str); 3] =
    [("beng", "Bengal"), ("siam", "Siamese"), ("pers", "Persian")];

/// Number of cards per grid row.
pub const DEFAULT_GRID_COLUMNS: u16 = 4;

/// Minimum number of cards per grid row.
pub const MIN_GRID_COLUMNS: u16 = 1;

/// Maximum number of cards per grid row.
pub const MAX_GRID_COLUMNS: u16 = 8;

const _: () = {
    assert!(DEFAULT_PAGE_LIMIT >= MIN_PAGE_LIMIT);
    assert!(DEFAULT_PAGE_LIMIT <= MAX_PAGE_LIMIT);
    assert!(DEFAULT_GRID_COLUMNS >= MIN_GRID_COLUMNS);
    assert!(DEFAULT_GRID_COLUMNS <= MAX_GRID_COLUMNS);
};
