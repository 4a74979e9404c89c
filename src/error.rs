//! Request-level error type and its HTML rendering.
//!
//! Every failure while serving a page is converted into an [`AppError`]. The
//! response never leaks upstream details to the browser; those are logged.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors that fail a single request (never the process).
#[derive(Debug, Error)]
pub enum AppError {
    /// Transport failure, timeout, non-JSON body or an upstream error status.
    #[error("{service} is unavailable: {reason}")]
    UpstreamUnavailable {
        service: &'static str,
        reason: String,
    },

    /// Body parsed as JSON but a required field is missing.
    #[error("{service} returned a malformed response: {reason}")]
    MalformedResponse {
        service: &'static str,
        reason: String,
    },

    /// Image search returned no results for the query.
    #[error("No images found for query '{query}'")]
    EmptyImageResult { query: String },

    #[error("Template rendering failed: {0}")]
    Render(#[from] askama::Error),
}

impl AppError {
    pub fn upstream(service: &'static str, reason: impl Into<String>) -> Self {
        Self::UpstreamUnavailable {
            service,
            reason: reason.into(),
        }
    }

    pub fn malformed(service: &'static str, reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            service,
            reason: reason.into(),
        }
    }

    pub fn empty_images(query: impl Into<String>) -> Self {
        Self::EmptyImageResult {
            query: query.into(),
        }
    }

    /// HTTP status the error page is served with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::UpstreamUnavailable { .. }
            | AppError::MalformedResponse { .. }
            | AppError::EmptyImageResult { .. } => StatusCode::BAD_GATEWAY,
            AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Generic failure page, rendered without a background photo.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
struct ErrorTemplate {
    status: u16,
    headline: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let headline = match self {
            AppError::Render(_) => {
                tracing::error!(error = %self, "Request failed");
                "Something went wrong on our side."
            }
            _ => {
                tracing::warn!(error = %self, "Upstream failure");
                "The weather service is not answering right now."
            }
        };

        let page = ErrorTemplate {
            status: status.as_u16(),
            headline,
        };

        (status, page).into_response()
    }
}
