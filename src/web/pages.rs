//! Page views and their Askama templates.
//!
//! Rendering is a pure function of the view: no upstream calls happen here.

use askama::Template;
use axum::response::{Html, IntoResponse, Response};

use crate::domain::entities::{ImageResult, WeatherResult};
use crate::domain::text::title_case;
use crate::error::AppError;

/// Template for the home page (`templates/home.html`).
#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate<'a> {
    background: &'a ImageResult,
}

/// Template for an unknown location (`templates/not_found.html`).
#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundTemplate<'a> {
    background: &'a ImageResult,
}

/// Template for current weather (`templates/weather.html`).
#[derive(Template)]
#[template(path = "weather.html")]
struct WeatherTemplate<'a> {
    background: &'a ImageResult,
    weather: &'a WeatherResult,
    location: &'a str,
}

/// One of the three pages the site serves.
#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    Home {
        background: ImageResult,
    },
    NotFound {
        background: ImageResult,
    },
    Weather {
        background: ImageResult,
        weather: WeatherResult,
        /// Location as displayed (title-cased).
        location: String,
    },
}

impl PageView {
    pub fn home(background: ImageResult) -> Self {
        Self::Home { background }
    }

    pub fn not_found(background: ImageResult) -> Self {
        Self::NotFound { background }
    }

    /// Builds the weather view; `location` is title-cased for display.
    pub fn weather(background: ImageResult, weather: WeatherResult, location: &str) -> Self {
        Self::Weather {
            background,
            weather,
            location: title_case(location),
        }
    }

    /// Renders the view to HTML.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Render`] if the template fails to render.
    pub fn render(&self) -> Result<String, AppError> {
        let html = match self {
            PageView::Home { background } => HomeTemplate { background }.render()?,
            PageView::NotFound { background } => NotFoundTemplate { background }.render()?,
            PageView::Weather {
                background,
                weather,
                location,
            } => WeatherTemplate {
                background,
                weather,
                location,
            }
            .render()?,
        };

        Ok(html)
    }
}

impl IntoResponse for PageView {
    fn into_response(self) -> Response {
        match self.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => err.into_response(),
        }
    }
}
