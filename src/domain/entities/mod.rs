//! Core domain entities representing the data shown on a page.
//!
//! Entities are plain data structures derived from one upstream response and
//! dropped when the request completes. None of them is mutated after creation.
//!
//! # Entity Types
//!
//! - [`WeatherPayload`] - Fields read from the weather API, before validation
//! - [`WeatherResult`] - Display-ready current weather for a valid location
//! - [`WeatherLookup`] - Outcome of a weather query (found or unknown location)
//! - [`ImageResult`] - One background photo with its attribution
//! - [`SearchPage`] - One page of image search results with pagination totals

pub mod image;
pub mod weather;

pub use image::{ImageResult, SearchPage};
pub use weather::{WeatherLookup, WeatherPayload, WeatherResult};
