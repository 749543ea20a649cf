// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for TheCatAPI.
//!
//! [`CatApiClient`] issues the three requests the browser needs:
//!
//! - image search: `GET {search_endpoint}?limit=N&breed_ids={breed}&api_key={key}`
//! - image detail: `GET {image_endpoint}/{id}`
//! - image bytes for card thumbnails: `GET {url}`
//!
//! Each call is a single attempt. There is no retry, caching or rate
//! limiting, and no timeout unless one is configured.
//!
//! The client is cheap to clone (the underlying `reqwest::Client` is
//! reference counted), so each async task captures its own copy.

mod dto;

use crate::config::ApiConfig;
use crate::domain::catalog::{BreedId, DetailOutcome, ImageDetail, ImageSummary};
use crate::error::{FetchError, Result};
use reqwest::{Response, Url};

/// User agent sent with every request.
const USER_AGENT: &str = concat!("CatLens/", env!("CARGO_PKG_VERSION"));

/// Client for the search, detail and image-bytes endpoints.
#[derive(Debug, Clone)]
pub struct CatApiClient {
    http: reqwest::Client,
    api: ApiConfig,
}

impl CatApiClient {
    /// Builds a client for the given API settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`](crate::error::Error::Http) if the TLS backend
    /// cannot be initialized.
    pub fn new(api: ApiConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT);

        if let Some(timeout) = api.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            api,
        })
    }

    /// Builds the search URL for `breed`. The breed is passed through as-is.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidEndpoint`] if the configured search
    /// endpoint is not an absolute URL.
    pub fn search_url(&self, breed: &BreedId) -> std::result::Result<Url, FetchError> {
        let limit = self.api.page_limit().to_string();
        Url::parse_with_params(
            &self.api.search_endpoint,
            [
                ("limit", limit.as_str()),
                ("breed_ids", breed.as_str()),
                ("api_key", self.api.api_key.as_str()),
            ],
        )
        .map_err(|e| FetchError::InvalidEndpoint(format!("{}: {e}", self.api.search_endpoint)))
    }

    /// Builds the detail URL for image `id`, appended as one path segment.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidEndpoint`] if the configured image
    /// endpoint is not an absolute URL that can carry a path.
    pub fn detail_url(&self, id: &str) -> std::result::Result<Url, FetchError> {
        let endpoint = &self.api.image_endpoint;
        let mut url = Url::parse(endpoint)
            .map_err(|e| FetchError::InvalidEndpoint(format!("{endpoint}: {e}")))?;

        url.path_segments_mut()
            .map_err(|()| FetchError::InvalidEndpoint(format!("{endpoint}: cannot be a base")))?
            .pop_if_empty()
            .push(id);

        Ok(url)
    }

    /// Searches images for `breed`, in server order.
    ///
    /// # Errors
    ///
    /// Any non-success status, transport failure or malformed body.
    pub async fn search(
        &self,
        breed: &BreedId,
    ) -> std::result::Result<Vec<ImageSummary>, FetchError> {
        let url = self.search_url(breed)?;
        // The query string carries the API key; keep it out of the logs.
        tracing::debug!(breed = %breed, "searching images");

        let body = self.get_bytes(url).await?;
        let items = dto::parse_search(&body).map_err(|e| FetchError::Decode(e.to_string()))?;

        tracing::debug!(breed = %breed, count = items.len(), "search completed");
        Ok(items)
    }

    /// Looks up extended metadata for one image.
    ///
    /// # Errors
    ///
    /// Any non-success status, transport failure or malformed body.
    pub async fn detail(&self, id: &str) -> std::result::Result<ImageDetail, FetchError> {
        let url = self.detail_url(id)?;
        tracing::debug!(%url, "fetching image detail");

        let body = self.get_bytes(url).await?;
        dto::parse_detail(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }

    /// Like [`detail`](Self::detail), but folds every failure into
    /// [`DetailOutcome::Unavailable`].
    pub async fn fetch_detail(&self, id: &str) -> DetailOutcome {
        match self.detail(id).await {
            Ok(detail) => DetailOutcome::Found(detail),
            Err(err) => {
                tracing::warn!(id, %err, "image detail unavailable");
                DetailOutcome::Unavailable
            }
        }
    }

    /// Downloads the raw bytes behind an image URL.
    ///
    /// # Errors
    ///
    /// Invalid URL, non-success status or transport failure.
    pub async fn fetch_image(&self, url: &str) -> std::result::Result<Vec<u8>, FetchError> {
        let url = Url::parse(url).map_err(|e| FetchError::InvalidEndpoint(format!("{url}: {e}")))?;
        self.get_bytes(url).await
    }

    async fn get_bytes(&self, url: Url) -> std::result::Result<Vec<u8>, FetchError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(&e))?;

        let response = ensure_success(response)?;

        response
            .bytes()
            .await
            .map(|body| body.to_vec())
            .map_err(|e| FetchError::Network(e.to_string()))
    }
}

fn ensure_success(response: Response) -> std::result::Result<Response, FetchError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        tracing::debug!(%status, url = %response.url().path(), "non-success response");
        Err(FetchError::Status(status.as_u16()))
    }
}
