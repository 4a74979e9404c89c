//! Home page handler.

use axum::extract::State;

use crate::error::AppError;
use crate::state::AppState;
use crate::web::pages::PageView;

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /`
///
/// The background is a random photo for the default topic.
///
/// # Errors
///
/// Returns an error page if the image API fails or has no photos for the
/// default topic.
pub async fn home_handler(State(state): State<AppState>) -> Result<PageView, AppError> {
    let background = state.background_service.pick(&state.default_topic).await?;

    Ok(PageView::home(background))
}
