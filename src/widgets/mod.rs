use serde::Serialize;

use crate::models::NotificationKind;
use crate::services::notifications::NotificationCenter;
use crate::storage::KvStore;

pub mod analytics;
pub mod anime;
pub mod calendar;
pub mod clock;
pub mod files;
pub mod music;
pub mod notes;
pub mod pomodoro;
pub mod profile;
pub mod quote;
pub mod social;
pub mod theme;
pub mod weather;

pub use analytics::AnalyticsWidget;
pub use anime::AnimeWidget;
pub use calendar::CalendarWidget;
pub use clock::ClockWidget;
pub use files::FilesWidget;
pub use music::MusicWidget;
pub use notes::NotesWidget;
pub use pomodoro::PomodoroWidget;
pub use profile::ProfileWidget;
pub use quote::QuoteWidget;
pub use social::SocialWidget;
pub use theme::ThemeWidget;
pub use weather::WeatherWidget;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetStatus {
    Uninitialized,
    Loading,
    Ready,
    /// Fetch failed; the widget renders fallback data.
    Degraded,
}

/// Common surface every widget controller exposes to the dashboard shell.
pub trait Widget {
    fn name(&self) -> &'static str;
    fn status(&self) -> WidgetStatus;
}

/// Persists a widget-state mutation. A rejected write surfaces a warning and
/// leaves the caller's in-memory state authoritative for the session.
pub(crate) fn write_through<T: Serialize>(
    store: &KvStore,
    notifier: &NotificationCenter,
    key: &str,
    value: &T,
) {
    if !store.set(key, value) {
        notifier.notify(
            NotificationKind::Warning,
            "Storage Full",
            &format!(
                "Could not save '{}'; changes are kept for this session only.",
                key
            ),
            false,
        );
    }
}
