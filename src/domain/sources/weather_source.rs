//! Source trait for current weather data.

use crate::domain::entities::WeatherPayload;
use crate::error::AppError;
use async_trait::async_trait;

/// Service label used in error messages.
pub const SERVICE: &str = "Weather API";

/// Provider of current weather conditions.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::OpenWeatherClient`] - OpenWeatherMap API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Queries current weather for a location name, in metric units.
    ///
    /// The location is passed through as-is. An unknown location is not an
    /// error at this level: it comes back as a payload whose status says so.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UpstreamUnavailable`] on transport failure or a
    /// non-JSON body, and [`AppError::MalformedResponse`] if the body lacks a
    /// status code.
    async fn current(&self, location: &str) -> Result<WeatherPayload, AppError>;
}
