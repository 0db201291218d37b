use reqwest::Client;
use std::time::Duration;

use super::{build_client, ApiError};
use crate::models::{GeoLocation, WeatherReport};

const CURRENT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const IP_GEOLOCATION_URL: &str = "http://ip-api.com/json";

/// OpenWeather-shaped current-conditions lookups, metric units.
pub struct WeatherClient {
    client: Client,
    api_key: String,
}

impl WeatherClient {
    pub fn new(api_key: String, timeout: Duration) -> Self {
        Self {
            client: build_client(timeout),
            api_key,
        }
    }

    pub async fn by_city(&self, city: &str) -> Result<WeatherReport, ApiError> {
        if self.api_key.is_empty() {
            return Err(ApiError::MissingKey);
        }

        let response = self
            .client
            .get(CURRENT_WEATHER_URL)
            .query(&[
                ("q", city),
                ("units", "metric"),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        Ok(response.json().await?)
    }

    pub async fn by_coordinates(&self, lat: f64, lon: f64) -> Result<WeatherReport, ApiError> {
        if self.api_key.is_empty() {
            return Err(ApiError::MissingKey);
        }

        let response = self
            .client
            .get(CURRENT_WEATHER_URL)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("units", "metric".to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        Ok(response.json().await?)
    }

    /// Geolocates by requester IP, then reuses the coordinate lookup.
    pub async fn by_ip(&self) -> Result<WeatherReport, ApiError> {
        if self.api_key.is_empty() {
            return Err(ApiError::MissingKey);
        }

        let response = self.client.get(IP_GEOLOCATION_URL).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        let geo: GeoLocation = response.json().await?;
        log::debug!("[Weather] geolocated to {} ({}, {})", geo.city, geo.lat, geo.lon);
        self.by_coordinates(geo.lat, geo.lon).await
    }
}
