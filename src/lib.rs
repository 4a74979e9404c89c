//! # Weatherscape
//!
//! A small web application that shows the current weather for a place over a
//! photo of that place, built with Axum.
//!
//! ## Architecture
//!
//! The crate keeps a layered structure:
//!
//! - **Domain Layer** ([`domain`]) - Entities, photo selection and upstream source traits
//! - **Application Layer** ([`application`]) - Weather validation and background selection
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest clients for OpenWeatherMap and Unsplash
//! - **Web Layer** ([`web`]) - Askama pages and request handlers
//!
//! ## Request Flow
//!
//! 1. `GET /weather?location=London` reaches [`web::handlers::weather_handler`]
//! 2. The weather API is queried once; an unknown location renders the not-found page
//! 3. The image API is queried once and one photo is picked at random
//! 4. The page is rendered and returned
//!
//! ## Quick Start
//!
//! ```bash
//! export WEATHER_API_KEY="..."
//! export IMAGE_API_KEY="..."
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod middleware;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for integration tests.
pub mod prelude {
    pub use crate::application::services::{BackgroundService, WeatherService};
    pub use crate::domain::entities::{ImageResult, WeatherLookup, WeatherResult};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
    pub use crate::web::pages::PageView;
}
