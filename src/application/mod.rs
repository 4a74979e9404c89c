//! Application layer services implementing page data logic.
//!
//! Services consume the source traits from [`crate::domain::sources`] and
//! turn raw upstream data into display-ready entities for the handlers.
//!
//! # Available Services
//!
//! - [`services::weather_service::WeatherService`] - Location validity and weather extraction
//! - [`services::background_service::BackgroundService`] - Background photo selection

pub mod services;
