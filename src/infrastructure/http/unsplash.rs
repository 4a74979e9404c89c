//! Unsplash photo search client.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use super::describe;
use crate::domain::entities::image::is_hex_color;
use crate::domain::entities::{ImageResult, SearchPage};
use crate::domain::sources::ImageSource;
use crate::domain::sources::image_source::SERVICE;
use crate::error::AppError;

/// Used when the API has no usable dominant color for a photo.
const FALLBACK_COLOR: &str = "#808080";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    total: u64,
    total_pages: u64,
    results: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    urls: PhotoUrls,
    color: Option<String>,
    user: Photographer,
}

#[derive(Debug, Deserialize)]
struct PhotoUrls {
    small: String,
}

#[derive(Debug, Deserialize)]
struct Photographer {
    name: String,
    links: PhotographerLinks,
}

#[derive(Debug, Deserialize)]
struct PhotographerLinks {
    #[serde(rename = "self")]
    profile: String,
}

impl From<Photo> for ImageResult {
    fn from(photo: Photo) -> Self {
        Self {
            url: photo.urls.small,
            color: photo
                .color
                .filter(|color| is_hex_color(color))
                .unwrap_or_else(|| FALLBACK_COLOR.to_string()),
            author_name: photo.user.name,
            author_profile_url: photo.user.links.profile,
        }
    }
}

impl From<SearchResponse> for SearchPage {
    fn from(response: SearchResponse) -> Self {
        Self {
            total: response.total,
            total_pages: response.total_pages,
            results: response.results.into_iter().map(ImageResult::from).collect(),
        }
    }
}

/// [`ImageSource`] backed by the Unsplash `search/photos` endpoint.
#[derive(Clone)]
pub struct UnsplashClient {
    client: reqwest::Client,
    base_url: String,
    access_key: String,
}

impl UnsplashClient {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        access_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            access_key: access_key.into(),
        }
    }
}

#[async_trait]
impl ImageSource for UnsplashClient {
    /// Issues `GET <base>?client_id=<key>&per_page=<n>&query=<q>&orientation=landscape`.
    #[instrument(skip(self), level = "info")]
    async fn search(&self, query: &str, per_page: u32) -> Result<SearchPage, AppError> {
        let per_page = per_page.to_string();

        let response = self
            .client
            .get(&self.base_url)
            .header("Accept-Version", "v1")
            .query(&[
                ("client_id", self.access_key.as_str()),
                ("per_page", per_page.as_str()),
                ("query", query),
                ("orientation", "landscape"),
            ])
            .send()
            .await
            .map_err(|e| AppError::upstream(SERVICE, describe(e)))?;

        let status = response.status();
        tracing::debug!(%status, "Image API responded");

        if !status.is_success() {
            return Err(AppError::upstream(SERVICE, format!("HTTP {status}")));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| AppError::upstream(SERVICE, format!("invalid body: {}", describe(e))))?;

        let parsed: SearchResponse = serde_json::from_value(body)
            .map_err(|e| AppError::malformed(SERVICE, e.to_string()))?;

        Ok(parsed.into())
    }
}
