use chrono::{DateTime, Local};

use crate::models::ClockView;
use crate::widgets::{Widget, WidgetStatus};

/// Stateless time/date projection; the host re-renders it every second.
pub struct ClockWidget {
    status: WidgetStatus,
}

impl ClockWidget {
    pub fn new() -> Self {
        Self {
            status: WidgetStatus::Uninitialized,
        }
    }

    pub fn load(&mut self) {
        self.status = WidgetStatus::Ready;
    }

    pub fn render(&self) -> ClockView {
        self.render_at(Local::now())
    }

    pub fn render_at(&self, now: DateTime<Local>) -> ClockView {
        ClockView {
            time: now.format("%-I:%M:%S %p").to_string(),
            date: now.format("%A, %b %-d, %Y").to_string(),
        }
    }
}

impl Default for ClockWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for ClockWidget {
    fn name(&self) -> &'static str {
        "clock"
    }

    fn status(&self) -> WidgetStatus {
        self.status
    }
}
