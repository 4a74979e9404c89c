//! HTTP clients for the upstream JSON APIs.
//!
//! Both clients share one [`reqwest::Client`] built by [`build_http_client`],
//! so connection pooling and the request timeout apply to every outbound call.

mod openweather;
mod unsplash;

pub use openweather::OpenWeatherClient;
pub use unsplash::UnsplashClient;

use std::time::Duration;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Builds the shared outbound HTTP client.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized.
pub fn build_http_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
}

/// Describes a reqwest error without the request URL, which carries credentials.
fn describe(error: reqwest::Error) -> String {
    if error.is_timeout() {
        "request timed out".to_string()
    } else {
        error.without_url().to_string()
    }
}
