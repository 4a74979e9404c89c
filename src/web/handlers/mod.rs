//! HTML page handlers.

mod home;
mod weather;

pub use home::home_handler;
pub use weather::{WeatherQuery, weather_handler};
