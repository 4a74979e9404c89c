//! Web route configuration.

use crate::state::AppState;
use crate::web::handlers::{home_handler, weather_handler};
use axum::{Router, routing::get};

/// Public page routes.
///
/// # Endpoints
///
/// - `GET /` - Home page with a search form over a default-topic photo
/// - `GET /weather?location=<name>` - Weather page, or not-found page
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/weather", get(weather_handler))
}
