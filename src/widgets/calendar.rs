use chrono::{Datelike, Local, Months, NaiveDate};
use std::sync::Arc;
use uuid::Uuid;

use crate::models::{
    CalendarEvent, EventCategory, MonthCell, MonthView, NotificationKind, TodayView,
};
use crate::services::notifications::NotificationCenter;
use crate::storage::KvStore;
use crate::widgets::{write_through, Widget, WidgetStatus};

const EVENTS_KEY: &str = "calendarEvents";

pub struct CalendarWidget {
    store: Arc<KvStore>,
    notifier: Arc<NotificationCenter>,
    events: Vec<CalendarEvent>,
    /// First day of the month currently shown in the grid.
    visible_month: NaiveDate,
    status: WidgetStatus,
}

impl CalendarWidget {
    pub fn new(store: Arc<KvStore>, notifier: Arc<NotificationCenter>) -> Self {
        let today = Local::now().date_naive();
        Self {
            store,
            notifier,
            events: Vec::new(),
            visible_month: first_of_month(today),
            status: WidgetStatus::Uninitialized,
        }
    }

    pub fn load(&mut self) {
        self.events = self.store.get(EVENTS_KEY).unwrap_or_default();
        self.visible_month = first_of_month(Local::now().date_naive());
        self.status = WidgetStatus::Ready;
    }

    /// Creates or updates an event. A blank title or a date that does not
    /// parse as `YYYY-MM-DD` is rejected without persisting; returns the
    /// event id otherwise.
    pub fn upsert_event(
        &mut self,
        id: Option<&str>,
        title: &str,
        date: &str,
        time: Option<&str>,
        category: EventCategory,
    ) -> Option<String> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        let Ok(date) = NaiveDate::parse_from_str(date, "%Y-%m-%d") else {
            return None;
        };

        let id = id
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let event = CalendarEvent {
            id: id.clone(),
            title: title.to_string(),
            date,
            time: time.map(|t| t.trim().to_string()).filter(|t| !t.is_empty()),
            category,
        };

        let updated = if let Some(existing) = self.events.iter_mut().find(|e| e.id == id) {
            *existing = event;
            true
        } else {
            self.events.push(event);
            false
        };

        write_through(&self.store, &self.notifier, EVENTS_KEY, &self.events);
        self.notifier.notify(
            NotificationKind::Success,
            if updated { "Event Updated" } else { "Event Added" },
            &format!(
                "\"{}\" has been {} your calendar.",
                title,
                if updated { "updated in" } else { "added to" }
            ),
            false,
        );

        Some(id)
    }

    /// Removes one event by id; unknown ids are a no-op.
    pub fn delete_event(&mut self, id: &str) {
        let Some(index) = self.events.iter().position(|e| e.id == id) else {
            return;
        };

        let removed = self.events.remove(index);
        write_through(&self.store, &self.notifier, EVENTS_KEY, &self.events);
        self.notifier.notify(
            NotificationKind::Success,
            "Event Deleted",
            &format!("\"{}\" has been removed from your calendar.", removed.title),
            false,
        );
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn events_on(&self, date: NaiveDate) -> Vec<CalendarEvent> {
        self.events
            .iter()
            .filter(|e| e.date == date)
            .cloned()
            .collect()
    }

    pub fn upcoming_events(&self, limit: usize) -> Vec<CalendarEvent> {
        self.upcoming_events_from(Local::now().date_naive(), limit)
    }

    /// Events dated `today` or later, soonest first, capped at `limit`.
    pub fn upcoming_events_from(&self, today: NaiveDate, limit: usize) -> Vec<CalendarEvent> {
        let mut upcoming: Vec<CalendarEvent> = self
            .events
            .iter()
            .filter(|e| e.date >= today)
            .cloned()
            .collect();
        upcoming.sort_by(|a, b| a.date.cmp(&b.date));
        upcoming.truncate(limit);
        upcoming
    }

    pub fn previous_month(&mut self) {
        if let Some(month) = self.visible_month.checked_sub_months(Months::new(1)) {
            self.visible_month = month;
        }
    }

    pub fn next_month(&mut self) {
        if let Some(month) = self.visible_month.checked_add_months(Months::new(1)) {
            self.visible_month = month;
        }
    }

    pub fn render_month(&self) -> MonthView {
        self.render_month_at(Local::now().date_naive())
    }

    /// Month grid for the visible month: leading filler cells up to the
    /// first weekday, then one cell per day with today/event markers.
    pub fn render_month_at(&self, today: NaiveDate) -> MonthView {
        let first = self.visible_month;
        let leading = first.weekday().num_days_from_sunday() as usize;

        let mut cells = Vec::with_capacity(leading + 31);
        for _ in 0..leading {
            cells.push(MonthCell {
                day: None,
                date: None,
                is_today: false,
                has_events: false,
            });
        }

        for day in 1..=days_in_month(first) {
            let Some(date) = first.with_day(day) else {
                continue;
            };
            cells.push(MonthCell {
                day: Some(day),
                date: Some(date),
                is_today: date == today,
                has_events: self.events.iter().any(|e| e.date == date),
            });
        }

        MonthView {
            title: first.format("%B %Y").to_string(),
            weekdays: vec!["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
            cells,
        }
    }

    pub fn render_today(&self) -> TodayView {
        self.render_today_at(Local::now().date_naive())
    }

    pub fn render_today_at(&self, today: NaiveDate) -> TodayView {
        TodayView {
            date: today,
            events: self.events_on(today),
        }
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn days_in_month(first: NaiveDate) -> u32 {
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(30)
}

impl Widget for CalendarWidget {
    fn name(&self) -> &'static str {
        "calendar"
    }

    fn status(&self) -> WidgetStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::days_in_month;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn month_lengths_include_leap_february() {
        assert_eq!(days_in_month(date(2025, 1, 1)), 31);
        assert_eq!(days_in_month(date(2025, 2, 1)), 28);
        assert_eq!(days_in_month(date(2024, 2, 1)), 29);
        assert_eq!(days_in_month(date(2025, 4, 1)), 30);
        assert_eq!(days_in_month(date(2025, 12, 1)), 31);
    }
}
