//! Business logic services for the application layer.

pub mod background_service;
pub mod weather_service;

pub use background_service::BackgroundService;
pub use weather_service::WeatherService;
