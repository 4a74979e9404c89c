//! Current weather lookup service.

use std::sync::Arc;

use crate::domain::entities::{WeatherLookup, WeatherPayload, WeatherResult};
use crate::domain::sources::WeatherSource;
use crate::domain::sources::weather_source::SERVICE;
use crate::domain::text::capitalize;
use crate::error::AppError;

/// Suffix selecting the high-resolution rendition of a weather icon.
const ICON_SUFFIX: &str = "@2x.png";

/// Service turning raw weather payloads into displayable results.
///
/// Decides whether a location is valid and extracts the description, icon and
/// temperature for valid ones.
pub struct WeatherService<W: WeatherSource> {
    source: Arc<W>,
    icon_base_url: String,
}

impl<W: WeatherSource> WeatherService<W> {
    /// Creates a new weather service.
    ///
    /// `icon_base_url` is the prefix icon identifiers are appended to.
    pub fn new(source: Arc<W>, icon_base_url: impl Into<String>) -> Self {
        Self {
            source,
            icon_base_url: icon_base_url.into(),
        }
    }

    /// Looks up current weather for a location name.
    ///
    /// # Validity
    ///
    /// - status `"404"` → [`WeatherLookup::NotFound`]
    /// - status `"200"` → [`WeatherLookup::Found`]
    ///
    /// The location is passed to the source as-is, blank or not.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UpstreamUnavailable`] for any other status (bad
    /// credentials, rate limiting, ...) or transport failure.
    /// Returns [`AppError::MalformedResponse`] if a valid payload lacks the
    /// description, icon or temperature.
    pub async fn lookup(&self, location: &str) -> Result<WeatherLookup, AppError> {
        let payload = self.source.current(location).await?;

        if payload.is_not_found() {
            tracing::debug!(location, "Location not found");
            return Ok(WeatherLookup::NotFound);
        }

        if !payload.is_ok() {
            return Err(AppError::upstream(
                SERVICE,
                format!(
                    "status {}: {}",
                    payload.status,
                    payload.message.as_deref().unwrap_or("no message")
                ),
            ));
        }

        self.extract(payload).map(WeatherLookup::Found)
    }

    /// Builds the absolute icon URL for an icon identifier.
    pub fn icon_url(&self, icon_id: &str) -> String {
        format!("{}{}{}", self.icon_base_url, icon_id, ICON_SUFFIX)
    }

    fn extract(&self, payload: WeatherPayload) -> Result<WeatherResult, AppError> {
        let description = payload
            .description
            .ok_or_else(|| AppError::malformed(SERVICE, "missing weather description"))?;

        let icon_id = payload
            .icon_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::malformed(SERVICE, "missing weather icon"))?;

        let temperature = payload
            .temperature
            .ok_or_else(|| AppError::malformed(SERVICE, "missing temperature"))?;

        Ok(WeatherResult {
            description: capitalize(&description),
            icon_url: self.icon_url(&icon_id),
            temperature,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sources::MockWeatherSource;

    const ICON_BASE: &str = "https://openweathermap.org/img/wn/";

    fn london_payload() -> WeatherPayload {
        WeatherPayload {
            status: "200".to_string(),
            message: None,
            description: Some("clear sky".to_string()),
            icon_id: Some("01d".to_string()),
            temperature: Some(15.5),
        }
    }

    fn not_found_payload() -> WeatherPayload {
        WeatherPayload {
            status: "404".to_string(),
            message: Some("city not found".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_lookup_valid_location() {
        let mut mock_source = MockWeatherSource::new();
        mock_source
            .expect_current()
            .withf(|location| location == "London")
            .times(1)
            .returning(|_| Ok(london_payload()));

        let service = WeatherService::new(Arc::new(mock_source), ICON_BASE);

        let result = service.lookup("London").await.unwrap();

        assert_eq!(
            result,
            WeatherLookup::Found(WeatherResult {
                description: "Clear sky".to_string(),
                icon_url: "https://openweathermap.org/img/wn/01d@2x.png".to_string(),
                temperature: 15.5,
            })
        );
    }

    #[tokio::test]
    async fn test_lookup_not_found() {
        let mut mock_source = MockWeatherSource::new();
        mock_source
            .expect_current()
            .times(1)
            .returning(|_| Ok(not_found_payload()));

        let service = WeatherService::new(Arc::new(mock_source), ICON_BASE);

        let result = service.lookup("Qwxyzabc123").await.unwrap();

        assert_eq!(result, WeatherLookup::NotFound);
    }

    #[tokio::test]
    async fn test_lookup_passes_blank_location_through() {
        let mut mock_source = MockWeatherSource::new();
        mock_source
            .expect_current()
            .withf(|location| location.trim().is_empty())
            .times(2)
            .returning(|_| {
                Ok(WeatherPayload {
                    status: "400".to_string(),
                    message: Some("Nothing to geocode".to_string()),
                    ..Default::default()
                })
            });

        let service = WeatherService::new(Arc::new(mock_source), ICON_BASE);

        for location in ["", "   "] {
            let err = service.lookup(location).await.unwrap_err();
            assert!(matches!(err, AppError::UpstreamUnavailable { .. }));
        }
    }

    #[tokio::test]
    async fn test_lookup_blank_location_reported_unknown() {
        let mut mock_source = MockWeatherSource::new();
        mock_source
            .expect_current()
            .withf(|location| location == "   ")
            .times(1)
            .returning(|_| Ok(not_found_payload()));

        let service = WeatherService::new(Arc::new(mock_source), ICON_BASE);

        assert_eq!(service.lookup("   ").await.unwrap(), WeatherLookup::NotFound);
    }

    #[tokio::test]
    async fn test_lookup_other_status_is_upstream_error() {
        let mut mock_source = MockWeatherSource::new();
        mock_source.expect_current().times(1).returning(|_| {
            Ok(WeatherPayload {
                status: "401".to_string(),
                message: Some("Invalid API key".to_string()),
                ..Default::default()
            })
        });

        let service = WeatherService::new(Arc::new(mock_source), ICON_BASE);

        let err = service.lookup("London").await.unwrap_err();

        assert!(matches!(err, AppError::UpstreamUnavailable { .. }));
        assert!(err.to_string().contains("401"));
    }

    #[tokio::test]
    async fn test_lookup_missing_fields_is_malformed() {
        let mut mock_source = MockWeatherSource::new();
        mock_source.expect_current().times(1).returning(|_| {
            Ok(WeatherPayload {
                temperature: None,
                ..london_payload()
            })
        });

        let service = WeatherService::new(Arc::new(mock_source), ICON_BASE);

        let err = service.lookup("London").await.unwrap_err();

        assert!(matches!(err, AppError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn test_lookup_propagates_transport_error() {
        let mut mock_source = MockWeatherSource::new();
        mock_source
            .expect_current()
            .times(1)
            .returning(|_| Err(AppError::upstream(SERVICE, "connection refused")));

        let service = WeatherService::new(Arc::new(mock_source), ICON_BASE);

        let err = service.lookup("London").await.unwrap_err();

        assert!(matches!(err, AppError::UpstreamUnavailable { .. }));
    }

    #[test]
    fn test_icon_url_format() {
        let service = WeatherService::new(Arc::new(MockWeatherSource::new()), ICON_BASE);

        for icon in ["01d", "10n", "50d"] {
            let url = service.icon_url(icon);
            assert_eq!(url, format!("{ICON_BASE}{icon}@2x.png"));
        }
    }
}
