use std::sync::Arc;

use crate::models::{AnalyticsCategory, AnalyticsData, AnalyticsView, NotificationKind, WEEK_SLOTS};
use crate::services::notifications::NotificationCenter;
use crate::storage::KvStore;
use crate::widgets::{write_through, Widget, WidgetStatus};

const DATA_KEY: &str = "analyticsData";

pub const WEEKDAY_LABELS: [&str; WEEK_SLOTS] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

pub struct AnalyticsWidget {
    store: Arc<KvStore>,
    notifier: Arc<NotificationCenter>,
    data: AnalyticsData,
    status: WidgetStatus,
}

impl AnalyticsWidget {
    pub fn new(store: Arc<KvStore>, notifier: Arc<NotificationCenter>) -> Self {
        Self {
            store,
            notifier,
            data: AnalyticsData::sample(),
            status: WidgetStatus::Uninitialized,
        }
    }

    /// Seeds and persists the sample series on first use; a stored series of
    /// the wrong length reads as absent.
    pub fn load(&mut self) {
        match self
            .store
            .get::<AnalyticsData>(DATA_KEY)
            .filter(AnalyticsData::is_valid)
        {
            Some(data) => self.data = data,
            None => {
                self.data = AnalyticsData::sample();
                write_through(&self.store, &self.notifier, DATA_KEY, &self.data);
            }
        }
        self.status = WidgetStatus::Ready;
    }

    /// Replaces all series at once. Series of the wrong length are rejected
    /// without persisting.
    pub fn replace_series(&mut self, data: AnalyticsData) -> bool {
        if !data.is_valid() {
            return false;
        }

        self.data = data;
        write_through(&self.store, &self.notifier, DATA_KEY, &self.data);
        self.notifier.notify(
            NotificationKind::Success,
            "Data Updated",
            "Analytics data has been updated.",
            false,
        );
        true
    }

    /// Increments one weekday slot (0 = Monday).
    pub fn record(&mut self, category: AnalyticsCategory, weekday: usize) -> bool {
        if weekday >= WEEK_SLOTS {
            return false;
        }

        self.data.series_mut(category)[weekday] += 1;
        write_through(&self.store, &self.notifier, DATA_KEY, &self.data);
        true
    }

    pub fn data(&self) -> &AnalyticsData {
        &self.data
    }

    pub fn render(&self) -> AnalyticsView {
        AnalyticsView {
            labels: WEEKDAY_LABELS.to_vec(),
            anime: self.data.anime.clone(),
            manga: self.data.manga.clone(),
            projects: self.data.projects.clone(),
            anime_total: self.data.anime.iter().sum(),
            manga_total: self.data.manga.iter().sum(),
        }
    }
}

impl Widget for AnalyticsWidget {
    fn name(&self) -> &'static str {
        "analytics"
    }

    fn status(&self) -> WidgetStatus {
        self.status
    }
}
