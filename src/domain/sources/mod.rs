//! Source trait definitions for the two remote data providers.
//!
//! Traits define the contract for fetching upstream data; implementations
//! live in `crate::infrastructure::http`. Mock implementations are generated
//! via `mockall` for service tests.
//!
//! # Available Sources
//!
//! - [`WeatherSource`] - Current weather by location name
//! - [`ImageSource`] - Landscape photo search by free-text query

pub mod image_source;
pub mod weather_source;

pub use image_source::ImageSource;
pub use weather_source::WeatherSource;

#[cfg(test)]
pub use image_source::MockImageSource;
#[cfg(test)]
pub use weather_source::MockWeatherSource;
