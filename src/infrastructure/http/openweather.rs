//! OpenWeatherMap current weather client.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use super::describe;
use crate::domain::entities::WeatherPayload;
use crate::domain::sources::WeatherSource;
use crate::domain::sources::weather_source::SERVICE;
use crate::error::AppError;

/// Current weather response body.
///
/// Success and error bodies share the `cod` field; everything else is absent
/// on errors.
#[derive(Debug, Deserialize)]
struct WeatherResponse {
    cod: Option<ResponseCode>,
    #[serde(default)]
    message: Option<Value>,
    #[serde(default)]
    weather: Vec<Condition>,
    main: Option<Readings>,
}

/// `cod` is a number on success and a string on errors.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ResponseCode {
    Number(i64),
    Text(String),
}

impl ResponseCode {
    fn into_string(self) -> String {
        match self {
            ResponseCode::Number(n) => n.to_string(),
            ResponseCode::Text(s) => s.trim().to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: Option<String>,
    icon: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Readings {
    temp: Option<f64>,
}

impl WeatherResponse {
    fn into_payload(self) -> Result<WeatherPayload, AppError> {
        let status = self
            .cod
            .ok_or_else(|| AppError::malformed(SERVICE, "missing status code"))?
            .into_string();

        let message = self.message.map(|m| match m {
            Value::String(s) => s,
            other => other.to_string(),
        });

        let condition = self.weather.into_iter().next();
        let (description, icon_id) = match condition {
            Some(c) => (c.description, c.icon),
            None => (None, None),
        };

        Ok(WeatherPayload {
            status,
            message,
            description,
            icon_id,
            temperature: self.main.and_then(|m| m.temp),
        })
    }
}

/// [`WeatherSource`] backed by the OpenWeatherMap current weather endpoint.
#[derive(Clone)]
pub struct OpenWeatherClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherClient {
    /// Issues `GET <base>?q=<location>&appid=<key>&units=metric`.
    ///
    /// The body is parsed whatever the HTTP status: an unknown location comes
    /// back as HTTP 404 with a JSON body carrying `"cod": "404"`.
    #[instrument(skip(self), level = "info")]
    async fn current(&self, location: &str) -> Result<WeatherPayload, AppError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", location),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(|e| AppError::upstream(SERVICE, describe(e)))?;

        tracing::debug!(status = %response.status(), "Weather API responded");

        let body: Value = response
            .json()
            .await
            .map_err(|e| AppError::upstream(SERVICE, format!("invalid body: {}", describe(e))))?;

        let parsed: WeatherResponse = serde_json::from_value(body)
            .map_err(|e| AppError::malformed(SERVICE, e.to_string()))?;

        parsed.into_payload()
    }
}
