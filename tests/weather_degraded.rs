use homeboard::api::WeatherClient;
use homeboard::models::{NotificationKind, WeatherReport};
use homeboard::services::NotificationCenter;
use homeboard::storage::{CacheEnvelope, CachedFetch, KvStore};
use homeboard::widgets::WeatherWidget;
use std::sync::Arc;
use std::time::Duration;

fn widget_with_location(location: &str) -> (WeatherWidget, Arc<KvStore>, Arc<NotificationCenter>) {
    let store = Arc::new(KvStore::in_memory().expect("store opens"));
    let session = Arc::new(KvStore::in_memory().expect("store opens"));
    let notifier = Arc::new(NotificationCenter::new(session));
    let cache = Arc::new(CachedFetch::new(store.clone(), notifier.clone()));

    assert!(store.set("weatherLocation", &location.to_string()));

    // No API key: the provider call fails before any network access.
    let client = WeatherClient::new(String::new(), Duration::from_secs(1));
    let widget = WeatherWidget::new(
        store.clone(),
        notifier.clone(),
        cache,
        client,
        Duration::from_secs(900),
    );
    (widget, store, notifier)
}

#[tokio::test]
async fn failed_fetch_degrades_to_mock_data_without_poisoning_the_cache() {
    let (mut weather, store, notifier) = widget_with_location("paris");

    weather.load(false).await;

    let view = weather.render();
    assert_eq!(view.location, "paris");
    assert_eq!(view.temperature, Some(22));
    assert_eq!(view.description, "Partly cloudy");
    assert_eq!(view.range, "H: 26° L: 18°");
    assert_eq!(view.icon, "cloud");

    let warnings: Vec<_> = notifier
        .all()
        .into_iter()
        .filter(|n| n.kind == NotificationKind::Warning)
        .collect();
    assert_eq!(warnings.len(), 1);

    // The fallback never lands in the cache.
    assert!(store
        .get::<CacheEnvelope<WeatherReport>>("weatherCache")
        .is_none());
}

#[tokio::test]
async fn empty_location_is_rejected() {
    let (mut weather, store, _notifier) = widget_with_location("paris");
    assert!(!weather.set_location("   ").await);
    assert_eq!(
        store.get::<String>("weatherLocation"),
        Some("paris".to_string())
    );
}

#[tokio::test]
async fn render_without_any_report_shows_a_placeholder() {
    let store = Arc::new(KvStore::in_memory().expect("store opens"));
    let session = Arc::new(KvStore::in_memory().expect("store opens"));
    let notifier = Arc::new(NotificationCenter::new(session));
    let cache = Arc::new(CachedFetch::new(store.clone(), notifier.clone()));
    let client = WeatherClient::new(String::new(), Duration::from_secs(1));

    let weather = WeatherWidget::new(store, notifier, cache, client, Duration::from_secs(900));
    let view = weather.render();
    assert_eq!(view.location, "No location set");
    assert_eq!(view.temperature, None);
}
