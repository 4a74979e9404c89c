//! Source trait for background photo search.

use crate::domain::entities::SearchPage;
use crate::error::AppError;
use async_trait::async_trait;

/// Service label used in error messages.
pub const SERVICE: &str = "Image API";

/// Provider of landscape photo search results.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::UnsplashClient`] - Unsplash search API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Fetches the first page of landscape photos matching `query`.
    ///
    /// # Arguments
    ///
    /// - `query` - free-text search topic
    /// - `per_page` - page size requested from the API
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UpstreamUnavailable`] on transport failure or an
    /// error status, and [`AppError::MalformedResponse`] if the body does not
    /// match the expected shape.
    async fn search(&self, query: &str, per_page: u32) -> Result<SearchPage, AppError>;
}
