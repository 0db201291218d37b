use std::sync::Arc;
use std::time::Duration;

use log::debug;

use crate::api::WeatherClient;
use crate::models::{NotificationKind, WeatherCondition, WeatherMain, WeatherReport, WeatherView};
use crate::services::notifications::NotificationCenter;
use crate::storage::{CachedFetch, KvStore};
use crate::widgets::{write_through, Widget, WidgetStatus};

const LOCATION_KEY: &str = "weatherLocation";
const CACHE_KEY: &str = "weatherCache";

pub struct WeatherWidget {
    store: Arc<KvStore>,
    notifier: Arc<NotificationCenter>,
    cache: Arc<CachedFetch>,
    client: WeatherClient,
    ttl: Duration,
    report: Option<WeatherReport>,
    status: WidgetStatus,
}

impl WeatherWidget {
    pub fn new(
        store: Arc<KvStore>,
        notifier: Arc<NotificationCenter>,
        cache: Arc<CachedFetch>,
        client: WeatherClient,
        ttl: Duration,
    ) -> Self {
        Self {
            store,
            notifier,
            cache,
            client,
            ttl,
            report: None,
            status: WidgetStatus::Uninitialized,
        }
    }

    /// Loads conditions for the saved location through the cache. Without a
    /// saved location an IP-based lookup is attempted once; if that also
    /// fails the widget stays uninitialized until `set_location`.
    pub async fn load(&mut self, force_refresh: bool) {
        let Some(location) = self.store.get::<String>(LOCATION_KEY) else {
            self.status = WidgetStatus::Loading;
            match self.client.by_ip().await {
                Ok(report) => {
                    self.report = Some(report);
                    self.status = WidgetStatus::Ready;
                }
                Err(err) => {
                    debug!("[Weather] ip lookup failed: {}", err);
                    self.report = None;
                    self.status = WidgetStatus::Uninitialized;
                }
            }
            return;
        };

        self.status = WidgetStatus::Loading;
        let client = &self.client;
        let fetch_location = location.clone();
        let mut degraded = false;

        let report = self
            .cache
            .load(
                CACHE_KEY,
                "Weather",
                self.ttl,
                || async move {
                    client
                        .by_city(&fetch_location)
                        .await
                        .map_err(anyhow::Error::from)
                },
                || {
                    degraded = true;
                    mock_report(&location)
                },
                force_refresh,
            )
            .await;

        self.report = Some(report);
        self.status = if degraded {
            WidgetStatus::Degraded
        } else {
            WidgetStatus::Ready
        };
    }

    /// Persists a new location and reloads past the cache. An empty location
    /// is rejected without persisting.
    pub async fn set_location(&mut self, city: &str) -> bool {
        let city = city.trim();
        if city.is_empty() {
            return false;
        }

        write_through(&self.store, &self.notifier, LOCATION_KEY, &city);
        self.notifier.notify(
            NotificationKind::Success,
            "Location Saved",
            &format!("Weather location set to {}.", city),
            false,
        );
        self.load(true).await;
        true
    }

    pub fn render(&self) -> WeatherView {
        match &self.report {
            Some(report) => {
                let condition = report.weather.first();
                WeatherView {
                    location: report.name.clone(),
                    temperature: Some(report.main.temp.round() as i64),
                    description: condition.map(|c| c.description.clone()).unwrap_or_default(),
                    range: format!(
                        "H: {}° L: {}°",
                        report.main.temp_max.round() as i64,
                        report.main.temp_min.round() as i64
                    ),
                    icon: condition_icon(condition.map(|c| c.main.as_str()).unwrap_or(""))
                        .to_string(),
                }
            }
            None => WeatherView {
                location: "No location set".to_string(),
                temperature: None,
                description: String::new(),
                range: String::new(),
                icon: "sun".to_string(),
            },
        }
    }
}

fn mock_report(location: &str) -> WeatherReport {
    WeatherReport {
        name: location.to_string(),
        main: WeatherMain {
            temp: 22.0,
            temp_min: 18.0,
            temp_max: 26.0,
        },
        weather: vec![WeatherCondition {
            main: "Clouds".to_string(),
            description: "Partly cloudy".to_string(),
        }],
    }
}

fn condition_icon(condition: &str) -> &'static str {
    match condition {
        "Clear" => "sun",
        "Clouds" => "cloud",
        "Rain" => "cloud-rain",
        "Drizzle" => "cloud-drizzle",
        "Thunderstorm" => "bolt",
        "Snow" => "snowflake",
        "Mist" | "Fog" => "smog",
        _ => "sun",
    }
}

impl Widget for WeatherWidget {
    fn name(&self) -> &'static str {
        "weather"
    }

    fn status(&self) -> WidgetStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_cover_known_conditions() {
        assert_eq!(condition_icon("Clear"), "sun");
        assert_eq!(condition_icon("Thunderstorm"), "bolt");
        assert_eq!(condition_icon("Fog"), "smog");
        assert_eq!(condition_icon("Sandstorm"), "sun");
    }

    #[test]
    fn mock_report_carries_the_requested_location() {
        let report = mock_report("Paris");
        assert_eq!(report.name, "Paris");
        assert_eq!(report.weather[0].main, "Clouds");
    }
}
