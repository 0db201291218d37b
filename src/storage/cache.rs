use chrono::Utc;
use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::models::NotificationKind;
use crate::services::notifications::NotificationCenter;
use crate::storage::KvStore;

/// A cached fetch result with freshness metadata. Envelopes are replaced
/// wholesale on every successful fetch, never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEnvelope<T> {
    pub payload: T,
    pub fetched_at: i64,
}

/// Fetch-with-expiry wrapper over the durable store.
///
/// Concurrent loads for the same key are not deduplicated; the last
/// successful fetch wins.
pub struct CachedFetch {
    store: Arc<KvStore>,
    notifier: Arc<NotificationCenter>,
}

impl CachedFetch {
    pub fn new(store: Arc<KvStore>, notifier: Arc<NotificationCenter>) -> Self {
        Self { store, notifier }
    }

    /// Returns the cached payload at `key` while it is younger than `ttl`,
    /// otherwise runs `fetch` once and caches the result. A failed fetch
    /// falls back to `fallback()` and leaves the cache untouched, surfacing
    /// the degraded mode as a warning notification titled with `label`.
    ///
    /// A zero `ttl` always refetches.
    pub async fn load<T, F, Fut>(
        &self,
        key: &str,
        label: &str,
        ttl: Duration,
        fetch: F,
        fallback: impl FnOnce() -> T,
        force_refresh: bool,
    ) -> T
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = anyhow::Result<T>>,
    {
        if !force_refresh && !ttl.is_zero() {
            if let Some(envelope) = self.store.get::<CacheEnvelope<T>>(key) {
                let age = Utc::now().timestamp_millis() - envelope.fetched_at;
                if age >= 0 && (age as u128) < ttl.as_millis() {
                    return envelope.payload;
                }
            }
        }

        match fetch().await {
            Ok(payload) => {
                let envelope = CacheEnvelope {
                    payload,
                    fetched_at: Utc::now().timestamp_millis(),
                };
                self.store.set(key, &envelope);
                envelope.payload
            }
            Err(err) => {
                warn!("[CachedFetch] fetch for '{}' failed: {}", key, err);
                self.notifier.notify(
                    NotificationKind::Warning,
                    &format!("{} Unavailable", label),
                    &format!("Showing fallback data: {}", err),
                    false,
                );
                fallback()
            }
        }
    }
}
