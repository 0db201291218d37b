use anyhow::Result;
use chrono::Local;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::api::{AniListClient, GithubClient, QuoteClient, WeatherClient, YouTubeClient};
use crate::models::{DashboardConfig, NotificationKind};
use crate::services::notifications::NotificationCenter;
use crate::storage::{CachedFetch, KvStore};
use crate::widgets::{
    AnalyticsWidget, AnimeWidget, CalendarWidget, ClockWidget, FilesWidget, MusicWidget,
    NotesWidget, PomodoroWidget, ProfileWidget, QuoteWidget, SocialWidget, ThemeWidget,
    WeatherWidget, Widget, WidgetStatus,
};

const DB_FILE: &str = "homeboard.db";

/// The page: one instance of every widget over shared storage and a shared
/// notification log. Widgets are mutually independent; no load order is
/// guaranteed between them.
pub struct Dashboard {
    pub notifications: Arc<NotificationCenter>,
    pub profile: ProfileWidget,
    pub theme: ThemeWidget,
    pub weather: WeatherWidget,
    pub analytics: AnalyticsWidget,
    pub calendar: CalendarWidget,
    pub quote: QuoteWidget,
    pub social: SocialWidget,
    pub anime: AnimeWidget,
    pub music: MusicWidget,
    pub notes: NotesWidget,
    pub files: FilesWidget,
    pub pomodoro: PomodoroWidget,
    pub clock: ClockWidget,
}

impl Dashboard {
    /// Wires storage (durable file + in-memory session), the notification
    /// center, the shared fetch cache, and every widget. Nothing is fetched
    /// yet; call [`Dashboard::load_all`].
    pub fn open(data_dir: &Path, mut config: DashboardConfig) -> Result<Self> {
        crate::utils::env::load_dotenv();
        crate::utils::env::apply_env_defaults(&mut config);

        std::fs::create_dir_all(data_dir)?;
        let durable = Arc::new(KvStore::open(&data_dir.join(DB_FILE))?);
        let session = Arc::new(KvStore::in_memory()?);

        let notifications = Arc::new(NotificationCenter::new(session));
        let cache = Arc::new(CachedFetch::new(durable.clone(), notifications.clone()));

        let timeout = Duration::from_secs(config.network.http_timeout_secs);
        let weather_ttl = Duration::from_secs(config.network.weather_ttl_mins * 60);

        Ok(Self {
            profile: ProfileWidget::new(durable.clone(), notifications.clone()),
            theme: ThemeWidget::new(durable.clone(), notifications.clone()),
            weather: WeatherWidget::new(
                durable.clone(),
                notifications.clone(),
                cache.clone(),
                WeatherClient::new(config.providers.openweather_api_key.clone(), timeout),
                weather_ttl,
            ),
            analytics: AnalyticsWidget::new(durable.clone(), notifications.clone()),
            calendar: CalendarWidget::new(durable.clone(), notifications.clone()),
            quote: QuoteWidget::new(
                durable.clone(),
                notifications.clone(),
                cache,
                QuoteClient::new(timeout),
            ),
            social: SocialWidget::new(
                notifications.clone(),
                YouTubeClient::new(config.providers.youtube_api_key.clone(), timeout),
                GithubClient::new(timeout),
                config.providers.youtube_channel_id.clone(),
                config.providers.github_username.clone(),
            ),
            anime: AnimeWidget::new(
                durable.clone(),
                notifications.clone(),
                AniListClient::new(timeout),
            ),
            music: MusicWidget::new(durable.clone(), notifications.clone()),
            notes: NotesWidget::new(durable.clone(), notifications.clone()),
            files: FilesWidget::new(durable.clone(), notifications.clone()),
            pomodoro: PomodoroWidget::new(durable, notifications.clone()),
            clock: ClockWidget::new(),
            notifications,
        })
    }

    /// Loads every widget: local state synchronously, then the fetching
    /// widgets concurrently. A slow or failed fetch in one widget never
    /// blocks another.
    pub async fn load_all(&mut self, force_refresh: bool) {
        self.profile.load();
        self.theme.load();
        self.analytics.load();
        self.calendar.load();
        self.music.load();
        self.notes.load();
        self.files.load();
        self.pomodoro.load();
        self.clock.load();

        let weather = self.weather.load(force_refresh);
        let quote = self.quote.load();
        let social = self.social.load();
        let anime = self.anime.load();
        tokio::join!(weather, quote, social, anime);

        self.notifications.notify(
            NotificationKind::Success,
            "Dashboard Ready",
            "All widgets have been initialized successfully.",
            false,
        );
    }

    /// One-second tick for the countdown-driven widgets.
    pub fn tick_second(&mut self) {
        self.pomodoro.tick();
        self.anime.tick(Local::now());
    }

    pub fn statuses(&self) -> Vec<(&'static str, WidgetStatus)> {
        let widgets: [&dyn Widget; 13] = [
            &self.profile,
            &self.theme,
            &self.weather,
            &self.analytics,
            &self.calendar,
            &self.quote,
            &self.social,
            &self.anime,
            &self.music,
            &self.notes,
            &self.files,
            &self.pomodoro,
            &self.clock,
        ];
        widgets.iter().map(|w| (w.name(), w.status())).collect()
    }
}
