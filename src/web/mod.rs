//! Web layer for browser-facing pages.
//!
//! Pages are rendered server-side with Askama templates from `templates/`.
//!
//! # Modules
//!
//! - [`handlers`] - Request handlers for the home and weather routes
//! - [`pages`] - Page views and their templates
//! - [`routes`] - Route configuration

pub mod handlers;
pub mod pages;
pub mod routes;
