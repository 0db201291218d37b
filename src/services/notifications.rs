use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;

use crate::models::{Notification, NotificationKind};
use crate::storage::KvStore;

const STORAGE_KEY: &str = "notifications";

/// Upper bound on the persisted log; the oldest entries are evicted first.
pub const MAX_NOTIFICATIONS: usize = 50;

/// How long the display layer keeps a non-sticky toast on screen.
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

/// Session-scoped log of transient user-facing events, newest first.
///
/// The log itself is single-owner; overlapping `notify` calls from separate
/// tasks resolve last-write-wins like any other store key.
pub struct NotificationCenter {
    store: Arc<KvStore>,
    next_id: AtomicU64,
    toasts: broadcast::Sender<Notification>,
}

impl NotificationCenter {
    pub fn new(store: Arc<KvStore>) -> Self {
        let (toasts, _) = broadcast::channel(32);
        Self {
            store,
            // Seeding from wall clock keeps ids unique across restarts even
            // though the session log itself does not survive one.
            next_id: AtomicU64::new(Utc::now().timestamp_millis() as u64),
            toasts,
        }
    }

    /// Appends a notification at the head of the log and broadcasts it for
    /// ephemeral display. Returns the assigned id.
    pub fn notify(
        &self,
        kind: NotificationKind,
        title: &str,
        message: &str,
        sticky: bool,
    ) -> u64 {
        let notification = Notification {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            kind,
            title: title.to_string(),
            message: message.to_string(),
            created_at: Utc::now().timestamp_millis(),
            sticky,
            read: false,
        };

        let mut all = self.all();
        all.insert(0, notification.clone());
        all.truncate(MAX_NOTIFICATIONS);
        self.persist(&all);

        let _ = self.toasts.send(notification.clone());
        notification.id
    }

    /// Current log, newest first.
    pub fn all(&self) -> Vec<Notification> {
        self.store.get(STORAGE_KEY).unwrap_or_default()
    }

    /// Removes one entry by id; unknown ids are a no-op.
    pub fn dismiss(&self, id: u64) {
        let mut all = self.all();
        let before = all.len();
        all.retain(|n| n.id != id);
        if all.len() != before {
            self.persist(&all);
        }
    }

    pub fn clear_all(&self) {
        self.persist(&[]);
    }

    pub fn unread_count(&self) -> usize {
        self.all().iter().filter(|n| !n.read).count()
    }

    /// Open-center action: flips every entry to read.
    pub fn mark_all_read(&self) {
        let mut all = self.all();
        for notification in &mut all {
            notification.read = true;
        }
        self.persist(&all);
    }

    /// Subscribes to the ephemeral toast stream. Non-sticky toasts should be
    /// dropped by the subscriber after [`TOAST_DURATION`].
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.toasts.subscribe()
    }

    fn persist(&self, notifications: &[Notification]) {
        self.store.set(STORAGE_KEY, &notifications);
    }
}
