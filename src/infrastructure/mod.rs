//! Infrastructure layer for external integrations.
//!
//! This layer implements the source traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`http`] - reqwest clients for the weather and image search APIs

pub mod http;
