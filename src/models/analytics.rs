use serde::{Deserialize, Serialize};

pub const WEEK_SLOTS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyticsCategory {
    Anime,
    Manga,
    Projects,
}

/// Weekly activity counts, one slot per weekday starting Monday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsData {
    pub anime: Vec<u32>,
    pub manga: Vec<u32>,
    pub projects: Vec<u32>,
}

impl AnalyticsData {
    /// Seed data shown before the user has recorded anything.
    pub fn sample() -> Self {
        Self {
            anime: vec![3, 5, 2, 4, 6, 3, 4],
            manga: vec![2, 3, 1, 2, 4, 2, 3],
            projects: vec![1, 2, 1, 3, 2, 1, 2],
        }
    }

    pub fn is_valid(&self) -> bool {
        self.anime.len() == WEEK_SLOTS
            && self.manga.len() == WEEK_SLOTS
            && self.projects.len() == WEEK_SLOTS
    }

    pub fn series(&self, category: AnalyticsCategory) -> &[u32] {
        match category {
            AnalyticsCategory::Anime => &self.anime,
            AnalyticsCategory::Manga => &self.manga,
            AnalyticsCategory::Projects => &self.projects,
        }
    }

    pub fn series_mut(&mut self, category: AnalyticsCategory) -> &mut Vec<u32> {
        match category {
            AnalyticsCategory::Anime => &mut self.anime,
            AnalyticsCategory::Manga => &mut self.manga,
            AnalyticsCategory::Projects => &mut self.projects,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsView {
    pub labels: Vec<&'static str>,
    pub anime: Vec<u32>,
    pub manga: Vec<u32>,
    pub projects: Vec<u32>,
    pub anime_total: u32,
    pub manga_total: u32,
}
