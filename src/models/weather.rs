use serde::{Deserialize, Serialize};

/// Provider-shaped weather report (OpenWeather current-conditions subset).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub name: String,
    pub main: WeatherMain,
    pub weather: Vec<WeatherCondition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherMain {
    pub temp: f64,
    pub temp_min: f64,
    pub temp_max: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherCondition {
    pub main: String,
    pub description: String,
}

/// IP-geolocation lookup result used for the no-saved-location fallback.
#[derive(Debug, Clone, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherView {
    pub location: String,
    /// Rounded current temperature in °C; absent until a report is loaded.
    pub temperature: Option<i64>,
    pub description: String,
    pub range: String,
    pub icon: String,
}
