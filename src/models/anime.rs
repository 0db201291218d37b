use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimeFeed {
    Trending,
    Upcoming,
    Releasing,
}

impl AnimeFeed {
    pub fn label(&self) -> &'static str {
        match self {
            AnimeFeed::Trending => "trending",
            AnimeFeed::Upcoming => "upcoming",
            AnimeFeed::Releasing => "currently releasing",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimeEntry {
    pub id: i64,
    pub title: String,
    pub cover_url: String,
    pub score: Option<u32>,
    /// "Season Year" label, or "TBA" when the provider has not scheduled it.
    pub season_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimeFeedsView {
    pub trending: Vec<AnimeEntry>,
    pub upcoming: Vec<AnimeEntry>,
    pub releasing: Vec<AnimeEntry>,
}

/// One entry of an imported watch-log backup. Fields are tolerant because
/// exports vary between tracker versions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchLogEntry {
    #[serde(default)]
    pub finish_date: Option<String>,
    #[serde(default)]
    pub episodes: Option<u32>,
    /// Minutes per episode.
    #[serde(default)]
    pub duration: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WatchSummary {
    pub year: i32,
    pub monthly_completed: Vec<u32>,
    pub monthly_hours: Vec<f64>,
    pub total_anime: u32,
    pub total_episodes: u64,
    pub total_hours: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountdownView {
    pub episode: u32,
    pub released: bool,
    /// Remaining time until air, absent once released.
    pub remaining: Option<RemainingTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemainingTime {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl RemainingTime {
    pub fn label(&self) -> String {
        format!(
            "{}d {}h {}m {}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

#[cfg(test)]
mod tests {
    use super::RemainingTime;

    #[test]
    fn remaining_time_renders_a_compact_label() {
        let remaining = RemainingTime {
            days: 2,
            hours: 5,
            minutes: 0,
            seconds: 41,
        };
        assert_eq!(remaining.label(), "2d 5h 0m 41s");
    }
}
