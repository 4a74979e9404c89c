//! Weather entities.

/// Weather API status code for an unknown location.
pub const STATUS_NOT_FOUND: &str = "404";

/// Weather API status code for a successful lookup.
pub const STATUS_OK: &str = "200";

/// Raw fields read from the weather API for one location query.
///
/// Every field except `status` is optional: the API omits them for error
/// responses, and their presence is checked only once the status says the
/// location is valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherPayload {
    /// Status code normalised to a string (`"200"`, `"404"`, ...).
    pub status: String,
    /// Error message the API attaches to non-success statuses.
    pub message: Option<String>,
    pub description: Option<String>,
    pub icon_id: Option<String>,
    pub temperature: Option<f64>,
}

impl WeatherPayload {
    /// Returns true if the API reported the location as unknown.
    pub fn is_not_found(&self) -> bool {
        self.status == STATUS_NOT_FOUND
    }

    /// Returns true if the API reported a successful lookup.
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// Current weather for a valid location, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherResult {
    /// Human-readable description with the first letter capitalized.
    pub description: String,
    /// Absolute URL of the high-resolution weather icon.
    pub icon_url: String,
    /// Current temperature in degrees Celsius.
    pub temperature: f64,
}

/// Outcome of looking up a location.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherLookup {
    Found(WeatherResult),
    NotFound,
}
