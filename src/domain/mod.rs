//! Domain layer containing entities, selection logic and source contracts.
//!
//! The domain layer has no dependency on HTTP clients or the web framework.
//! Upstream APIs are reached only through the traits in [`sources`].
//!
//! # Architecture
//!
//! - [`entities`] - Weather and image data structures
//! - [`sources`] - Upstream data provider trait definitions
//! - [`selection`] - Random background photo selection
//! - [`text`] - Display formatting helpers
//!
//! # Request Flow
//!
//! 1. Handler receives a location name
//! 2. [`sources::WeatherSource`] returns the raw weather payload
//! 3. [`crate::application::services::WeatherService`] validates and extracts it
//! 4. [`sources::ImageSource`] returns one page of photos
//! 5. [`selection::select_photo`] picks one of them

pub mod entities;
pub mod selection;
pub mod sources;
pub mod text;
