use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    #[default]
    Personal,
    Work,
    Anime,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    /// Serialized as `YYYY-MM-DD`; unparseable dates read the whole list as absent.
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default)]
    pub category: EventCategory,
}

/// One cell of the month grid. Leading filler cells carry no day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthCell {
    pub day: Option<u32>,
    pub date: Option<NaiveDate>,
    pub is_today: bool,
    pub has_events: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthView {
    pub title: String,
    pub weekdays: Vec<&'static str>,
    pub cells: Vec<MonthCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TodayView {
    pub date: NaiveDate,
    pub events: Vec<CalendarEvent>,
}
