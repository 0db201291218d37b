use chrono::{DateTime, Datelike, Days, Local, NaiveDate};
use futures_util::future::join_all;
use log::{debug, warn};
use std::sync::Arc;

use crate::api::AniListClient;
use crate::models::{
    AnimeEntry, AnimeFeed, AnimeFeedsView, CountdownView, NotificationKind, RemainingTime,
    WatchLogEntry, WatchSummary,
};
use crate::services::notifications::NotificationCenter;
use crate::storage::KvStore;
use crate::widgets::{write_through, Widget, WidgetStatus};

const EPISODE_KEY: &str = "episodeCountdown";
const WATCH_LOG_KEY: &str = "animeWatchLog";
const DEFAULT_EPISODE: u32 = 1147;

/// Minutes after air time before the countdown rolls to the next episode.
const AIRED_GRACE_MINUTES: i64 = 10;

pub struct AnimeWidget {
    store: Arc<KvStore>,
    notifier: Arc<NotificationCenter>,
    client: AniListClient,
    trending: Vec<AnimeEntry>,
    upcoming: Vec<AnimeEntry>,
    releasing: Vec<AnimeEntry>,
    episode: u32,
    next_air: Option<DateTime<Local>>,
    watch_log: Vec<WatchLogEntry>,
    status: WidgetStatus,
}

impl AnimeWidget {
    pub fn new(
        store: Arc<KvStore>,
        notifier: Arc<NotificationCenter>,
        client: AniListClient,
    ) -> Self {
        Self {
            store,
            notifier,
            client,
            trending: Vec::new(),
            upcoming: Vec::new(),
            releasing: Vec::new(),
            episode: DEFAULT_EPISODE,
            next_air: None,
            watch_log: Vec::new(),
            status: WidgetStatus::Uninitialized,
        }
    }

    /// Loads stored countdown/watch-log state, then queries the three
    /// catalog feeds. A failed feed falls back to an empty list with a
    /// warning; the others still render.
    pub async fn load(&mut self) {
        self.episode = self.store.get(EPISODE_KEY).unwrap_or(DEFAULT_EPISODE);
        self.watch_log = self.store.get(WATCH_LOG_KEY).unwrap_or_default();
        if self.next_air.is_none() {
            self.next_air = next_weekly_airing(Local::now());
        }

        self.status = WidgetStatus::Loading;

        let feeds = [AnimeFeed::Trending, AnimeFeed::Upcoming, AnimeFeed::Releasing];
        let client = &self.client;
        let results = join_all(feeds.iter().map(|feed| client.browse(*feed))).await;

        let mut degraded = false;
        for (feed, result) in feeds.iter().zip(results) {
            let entries = match result {
                Ok(entries) => entries,
                Err(err) => {
                    warn!("[Anime] {} feed failed: {}", feed.label(), err);
                    self.notifier.notify(
                        NotificationKind::Warning,
                        "Anime Feed",
                        &format!("Failed to load {} anime.", feed.label()),
                        false,
                    );
                    degraded = true;
                    Vec::new()
                }
            };
            match feed {
                AnimeFeed::Trending => self.trending = entries,
                AnimeFeed::Upcoming => self.upcoming = entries,
                AnimeFeed::Releasing => self.releasing = entries,
            }
        }

        self.status = if degraded {
            WidgetStatus::Degraded
        } else {
            WidgetStatus::Ready
        };
    }

    /// Advances the countdown once the grace period after air time has
    /// passed, persisting the new episode number.
    pub fn tick(&mut self, now: DateTime<Local>) {
        let Some(air) = self.next_air else {
            self.next_air = next_weekly_airing(now);
            return;
        };

        if now >= air + chrono::Duration::minutes(AIRED_GRACE_MINUTES) {
            self.episode += 1;
            write_through(&self.store, &self.notifier, EPISODE_KEY, &self.episode);
            self.next_air = next_weekly_airing(now);
        }
    }

    /// Replaces the watch log from a tracker backup. Invalid JSON is
    /// rejected with an error notification and nothing is persisted.
    pub fn import_log(&mut self, raw: &str) -> bool {
        match serde_json::from_str::<Vec<WatchLogEntry>>(raw) {
            Ok(entries) => {
                self.watch_log = entries;
                write_through(&self.store, &self.notifier, WATCH_LOG_KEY, &self.watch_log);
                self.notifier.notify(
                    NotificationKind::Success,
                    "Watch Log Imported",
                    &format!("Imported {} entries.", self.watch_log.len()),
                    false,
                );
                true
            }
            Err(err) => {
                debug!("[Anime] watch log rejected: {}", err);
                self.notifier.notify(
                    NotificationKind::Error,
                    "Import Failed",
                    "Invalid anime backup file.",
                    false,
                );
                false
            }
        }
    }

    /// Monthly completed counts and watch hours for `year`, with totals.
    /// Entries without a parseable finish date are skipped.
    pub fn watch_summary(&self, year: i32) -> WatchSummary {
        let mut monthly_completed = vec![0u32; 12];
        let mut monthly_hours = vec![0f64; 12];
        let mut total_anime = 0u32;
        let mut total_episodes = 0u64;
        let mut total_minutes = 0u64;

        for entry in &self.watch_log {
            let Some(date) = entry.finish_date.as_deref().and_then(parse_finish_date) else {
                continue;
            };
            if date.year() != year {
                continue;
            }

            let month = date.month0() as usize;
            let episodes = u64::from(entry.episodes.unwrap_or(0));
            let minutes = episodes * u64::from(entry.duration.unwrap_or(0));

            monthly_completed[month] += 1;
            monthly_hours[month] += minutes as f64 / 60.0;
            total_anime += 1;
            total_episodes += episodes;
            total_minutes += minutes;
        }

        WatchSummary {
            year,
            monthly_completed,
            monthly_hours,
            total_anime,
            total_episodes,
            total_hours: (total_minutes as f64 / 60.0).round() as u64,
        }
    }

    pub fn render_feeds(&self) -> AnimeFeedsView {
        AnimeFeedsView {
            trending: self.trending.clone(),
            upcoming: self.upcoming.clone(),
            releasing: self.releasing.clone(),
        }
    }

    pub fn render_countdown(&self) -> CountdownView {
        self.render_countdown_at(Local::now())
    }

    pub fn render_countdown_at(&self, now: DateTime<Local>) -> CountdownView {
        match self.next_air {
            Some(air) if now < air => {
                let diff = air - now;
                CountdownView {
                    episode: self.episode,
                    released: false,
                    remaining: Some(RemainingTime {
                        days: diff.num_days(),
                        hours: diff.num_hours() % 24,
                        minutes: diff.num_minutes() % 60,
                        seconds: diff.num_seconds() % 60,
                    }),
                }
            }
            Some(_) => CountdownView {
                episode: self.episode,
                released: true,
                remaining: None,
            },
            None => CountdownView {
                episode: self.episode,
                released: false,
                remaining: None,
            },
        }
    }
}

fn parse_finish_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|date| date.date_naive())
    })
}

/// Next Sunday 23:00 local time, rolling a week forward once that has passed.
fn next_weekly_airing(now: DateTime<Local>) -> Option<DateTime<Local>> {
    let days_ahead = (7 - now.weekday().num_days_from_sunday()) % 7;
    let candidate_date = now
        .date_naive()
        .checked_add_days(Days::new(u64::from(days_ahead)))?;
    let candidate = candidate_date
        .and_hms_opt(23, 0, 0)?
        .and_local_timezone(Local)
        .earliest()?;

    if candidate <= now {
        candidate_date
            .checked_add_days(Days::new(7))?
            .and_hms_opt(23, 0, 0)?
            .and_local_timezone(Local)
            .earliest()
    } else {
        Some(candidate)
    }
}

impl Widget for AnimeWidget {
    fn name(&self) -> &'static str {
        "anime"
    }

    fn status(&self) -> WidgetStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::{next_weekly_airing, parse_finish_date};
    use chrono::{Datelike, Local, NaiveDate, TimeZone, Weekday};

    #[test]
    fn finish_dates_parse_plain_and_rfc3339() {
        assert_eq!(
            parse_finish_date("2025-03-09"),
            NaiveDate::from_ymd_opt(2025, 3, 9)
        );
        assert_eq!(
            parse_finish_date("2025-03-09T12:00:00Z"),
            NaiveDate::from_ymd_opt(2025, 3, 9)
        );
        assert_eq!(parse_finish_date("soon"), None);
    }

    #[test]
    fn airing_lands_on_a_sunday_evening_in_the_future() {
        let now = Local.with_ymd_and_hms(2025, 6, 18, 9, 0, 0).unwrap();
        let air = next_weekly_airing(now).expect("airing time resolves");
        assert_eq!(air.weekday(), Weekday::Sun);
        assert!(air > now);
        assert!((air - now).num_days() < 7);
    }

    #[test]
    fn airing_rolls_over_after_sunday_evening() {
        // Sunday 23:30 is past this week's slot.
        let now = Local.with_ymd_and_hms(2025, 6, 22, 23, 30, 0).unwrap();
        let air = next_weekly_airing(now).expect("airing time resolves");
        assert_eq!(air.weekday(), Weekday::Sun);
        assert!(air > now);
    }
}
