//! Weather page handler.

use axum::extract::{Query, State};
use serde::Deserialize;

use crate::domain::entities::WeatherLookup;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::pages::PageView;

/// Query parameters for the weather page.
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    #[serde(default)]
    pub location: String,
}

/// Renders current weather for a location.
///
/// # Endpoint
///
/// `GET /weather?location=<name>`
///
/// # Request Flow
///
/// 1. Look up the location with the weather API
/// 2. Unknown location → not-found page over a default-topic photo
/// 3. Known location → weather page over a photo of the location, falling
///    back to the default topic when the search finds nothing
///
/// # Errors
///
/// Returns an error page (502) if either upstream API fails.
pub async fn weather_handler(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Result<PageView, AppError> {
    let location = query.location;

    match state.weather_service.lookup(&location).await? {
        WeatherLookup::NotFound => {
            let background = state.background_service.pick(&state.default_topic).await?;
            Ok(PageView::not_found(background))
        }
        WeatherLookup::Found(weather) => {
            let background = state
                .background_service
                .pick_or_fallback(&location, &state.default_topic)
                .await?;
            Ok(PageView::weather(background, weather, &location))
        }
    }
}
