//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated before the server
//! starts, and never mutated afterwards.
//!
//! ```bash
//! export WEATHER_API_KEY="your-openweathermap-key"
//! export IMAGE_API_KEY="your-unsplash-access-key"
//! ```
//!
//! ## Required Variables
//!
//! - `WEATHER_API_KEY` - OpenWeatherMap `appid`
//! - `IMAGE_API_KEY` - Unsplash access key (`client_id`)
//!
//! ## Optional Variables
//!
//! - `WEATHER_API_URL` - Current weather endpoint (default: OpenWeatherMap 2.5)
//! - `WEATHER_ICON_BASE_URL` - Prefix for weather icon URLs
//! - `IMAGE_API_URL` - Photo search endpoint (default: Unsplash)
//! - `IMAGES_PER_PAGE` - Search page size (default: 30, max: 30)
//! - `DEFAULT_TOPIC` - Background topic for the home and not-found pages (default: `nature`)
//! - `UPSTREAM_TIMEOUT_SECS` - Timeout for each outbound call (default: 10)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;
use url::Url;

pub const DEFAULT_WEATHER_API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_WEATHER_ICON_BASE_URL: &str = "https://openweathermap.org/img/wn/";
pub const DEFAULT_IMAGE_API_URL: &str = "https://api.unsplash.com/search/photos";
pub const DEFAULT_TOPIC: &str = "nature";

/// Largest page size the image search API accepts.
pub const MAX_IMAGES_PER_PAGE: u32 = 30;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub weather_api_key: String,
    pub weather_api_url: String,
    pub weather_icon_base_url: String,
    pub image_api_key: String,
    pub image_api_url: String,
    pub images_per_page: u32,
    /// Background topic used when no location-specific photo is wanted.
    pub default_topic: String,
    /// Timeout in seconds applied to each outbound API call.
    pub upstream_timeout_secs: u64,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if an API credential is missing.
    pub fn from_env() -> Result<Self> {
        let weather_api_key =
            env::var("WEATHER_API_KEY").context("WEATHER_API_KEY must be set")?;
        let image_api_key = env::var("IMAGE_API_KEY").context("IMAGE_API_KEY must be set")?;

        let weather_api_url =
            env::var("WEATHER_API_URL").unwrap_or_else(|_| DEFAULT_WEATHER_API_URL.to_string());
        let weather_icon_base_url = env::var("WEATHER_ICON_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_WEATHER_ICON_BASE_URL.to_string());
        let image_api_url =
            env::var("IMAGE_API_URL").unwrap_or_else(|_| DEFAULT_IMAGE_API_URL.to_string());

        let images_per_page = env::var("IMAGES_PER_PAGE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(MAX_IMAGES_PER_PAGE);

        let default_topic = env::var("DEFAULT_TOPIC").unwrap_or_else(|_| DEFAULT_TOPIC.to_string());

        let upstream_timeout_secs = env::var("UPSTREAM_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            weather_api_key,
            weather_api_url,
            weather_icon_base_url,
            image_api_key,
            image_api_url,
            images_per_page,
            default_topic,
            upstream_timeout_secs,
            listen_addr,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - an API credential is empty
    /// - an endpoint is not an absolute `http`/`https` URL
    /// - `images_per_page` is outside `1..=30`
    /// - `upstream_timeout_secs` is outside `1..=120`
    /// - `default_topic` is blank
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    pub fn validate(&self) -> Result<()> {
        if self.weather_api_key.trim().is_empty() {
            anyhow::bail!("WEATHER_API_KEY must not be empty");
        }

        if self.image_api_key.trim().is_empty() {
            anyhow::bail!("IMAGE_API_KEY must not be empty");
        }

        validate_http_url("WEATHER_API_URL", &self.weather_api_url)?;
        validate_http_url("WEATHER_ICON_BASE_URL", &self.weather_icon_base_url)?;
        validate_http_url("IMAGE_API_URL", &self.image_api_url)?;

        if self.images_per_page == 0 || self.images_per_page > MAX_IMAGES_PER_PAGE {
            anyhow::bail!(
                "IMAGES_PER_PAGE must be between 1 and {}, got {}",
                MAX_IMAGES_PER_PAGE,
                self.images_per_page
            );
        }

        if self.upstream_timeout_secs == 0 || self.upstream_timeout_secs > 120 {
            anyhow::bail!(
                "UPSTREAM_TIMEOUT_SECS must be between 1 and 120, got {}",
                self.upstream_timeout_secs
            );
        }

        if self.default_topic.trim().is_empty() {
            anyhow::bail!("DEFAULT_TOPIC must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    /// Timeout applied to each outbound API call.
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!(
            "  Weather API: {} (key {})",
            self.weather_api_url,
            mask_secret(&self.weather_api_key)
        );
        tracing::info!(
            "  Image API: {} (key {})",
            self.image_api_url,
            mask_secret(&self.image_api_key)
        );
        tracing::info!("  Images per page: {}", self.images_per_page);
        tracing::info!("  Default topic: {}", self.default_topic);
        tracing::info!("  Upstream timeout: {}s", self.upstream_timeout_secs);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn validate_http_url(name: &str, value: &str) -> Result<()> {
    let url = Url::parse(value).with_context(|| format!("{name} is not a valid URL: '{value}'"))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        anyhow::bail!("{} must use http or https, got '{}'", name, value);
    }

    Ok(())
}

/// Masks a credential for logging, keeping only its last four characters.
///
/// - `4bb3c583ee24c117` → `***c117`
/// - `abc` → `***`
fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();

    if chars.len() <= 8 {
        return "***".to_string();
    }

    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("***{}", tail)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
