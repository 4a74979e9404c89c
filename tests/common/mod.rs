#![allow(dead_code)]

use axum::Router;
use std::time::Duration;
use weatherscape::config::Config;
use weatherscape::infrastructure::http::build_http_client;
use weatherscape::state::AppState;
use weatherscape::web;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const WEATHER_PATH: &str = "/data/2.5/weather";
pub const PHOTOS_PATH: &str = "/search/photos";
pub const ICON_BASE: &str = "https://openweathermap.org/img/wn/";

/// Mock weather and image APIs for one test.
pub struct Upstreams {
    pub weather: MockServer,
    pub images: MockServer,
}

pub async fn start_upstreams() -> Upstreams {
    Upstreams {
        weather: MockServer::start().await,
        images: MockServer::start().await,
    }
}

pub fn test_config(upstreams: &Upstreams) -> Config {
    Config {
        weather_api_key: "weather-test-key".to_string(),
        weather_api_url: format!("{}{}", upstreams.weather.uri(), WEATHER_PATH),
        weather_icon_base_url: ICON_BASE.to_string(),
        image_api_key: "image-test-key".to_string(),
        image_api_url: format!("{}{}", upstreams.images.uri(), PHOTOS_PATH),
        images_per_page: 30,
        default_topic: "nature".to_string(),
        upstream_timeout_secs: 5,
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "debug".to_string(),
        log_format: "text".to_string(),
    }
}

pub fn create_test_state(upstreams: &Upstreams) -> AppState {
    let config = test_config(upstreams);
    let http = build_http_client(Duration::from_secs(config.upstream_timeout_secs)).unwrap();
    AppState::from_config(&config, http)
}

pub fn create_test_app(upstreams: &Upstreams) -> Router {
    web::routes::public_routes().with_state(create_test_state(upstreams))
}

pub async fn mount_weather_ok(
    server: &MockServer,
    location: &str,
    description: &str,
    icon: &str,
    temp: f64,
) {
    Mock::given(method("GET"))
        .and(path(WEATHER_PATH))
        .and(query_param("q", location))
        .and(query_param("appid", "weather-test-key"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "cod": 200,
            "name": location,
            "weather": [{ "id": 800, "main": "Clear", "description": description, "icon": icon }],
            "main": { "temp": temp }
        })))
        .mount(server)
        .await;
}

pub async fn mount_weather_not_found(server: &MockServer, location: &str) {
    Mock::given(method("GET"))
        .and(path(WEATHER_PATH))
        .and(query_param("q", location))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "cod": "404",
            "message": "city not found"
        })))
        .mount(server)
        .await;
}

pub async fn mount_weather_status(server: &MockServer, http_status: u16, cod: &str, message: &str) {
    Mock::given(method("GET"))
        .and(path(WEATHER_PATH))
        .respond_with(ResponseTemplate::new(http_status).set_body_json(serde_json::json!({
            "cod": cod,
            "message": message
        })))
        .mount(server)
        .await;
}

/// Mounts a search result holding exactly one photo credited to `author`.
pub async fn mount_single_photo(server: &MockServer, query: &str, author: &str) {
    Mock::given(method("GET"))
        .and(path(PHOTOS_PATH))
        .and(query_param("query", query))
        .and(query_param("client_id", "image-test-key"))
        .and(query_param("per_page", "30"))
        .and(query_param("orientation", "landscape"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total": 1,
            "total_pages": 1,
            "results": [{
                "id": "photo-1",
                "color": "#26594a",
                "urls": { "small": format!("https://images.unsplash.com/{}?w=400", query.replace(' ', "-")) },
                "user": {
                    "name": author,
                    "links": { "self": "https://api.unsplash.com/users/photographer" }
                }
            }]
        })))
        .mount(server)
        .await;
}

pub async fn mount_no_photos(server: &MockServer, query: &str) {
    Mock::given(method("GET"))
        .and(path(PHOTOS_PATH))
        .and(query_param("query", query))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total": 0,
            "total_pages": 0,
            "results": []
        })))
        .mount(server)
        .await;
}
