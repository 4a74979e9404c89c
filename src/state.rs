//! Shared application state.

use std::sync::Arc;

use crate::application::services::{BackgroundService, WeatherService};
use crate::config::Config;
use crate::domain::selection::RandomPicker;
use crate::infrastructure::http::{OpenWeatherClient, UnsplashClient};

/// State injected into every handler.
///
/// Holds only immutable, request-independent values; nothing is shared
/// mutably between requests.
#[derive(Clone)]
pub struct AppState {
    pub weather_service: Arc<WeatherService<OpenWeatherClient>>,
    pub background_service: Arc<BackgroundService<UnsplashClient, RandomPicker>>,
    /// Topic for backgrounds not tied to a location.
    pub default_topic: Arc<str>,
}

impl AppState {
    /// Wires the upstream clients and services from configuration.
    ///
    /// `http` is shared by both clients.
    pub fn from_config(config: &Config, http: reqwest::Client) -> Self {
        let weather_client = Arc::new(OpenWeatherClient::new(
            http.clone(),
            config.weather_api_url.clone(),
            config.weather_api_key.clone(),
        ));
        let image_client = Arc::new(UnsplashClient::new(
            http,
            config.image_api_url.clone(),
            config.image_api_key.clone(),
        ));

        Self {
            weather_service: Arc::new(WeatherService::new(
                weather_client,
                config.weather_icon_base_url.clone(),
            )),
            background_service: Arc::new(BackgroundService::new(
                image_client,
                RandomPicker,
                config.images_per_page,
            )),
            default_topic: Arc::from(config.default_topic.as_str()),
        }
    }
}
