use std::sync::Arc;

use crate::models::{NotificationKind, PomodoroPhase, PomodoroSettings, PomodoroView};
use crate::services::notifications::NotificationCenter;
use crate::storage::KvStore;
use crate::widgets::{write_through, Widget, WidgetStatus};

const SETTINGS_KEY: &str = "pomodoroSettings";
const MAX_PHASE_MINUTES: u32 = 180;

/// Work/break countdown driven by an external 1 Hz tick.
pub struct PomodoroWidget {
    store: Arc<KvStore>,
    notifier: Arc<NotificationCenter>,
    settings: PomodoroSettings,
    phase: PomodoroPhase,
    remaining_secs: u32,
    running: bool,
    status: WidgetStatus,
}

impl PomodoroWidget {
    pub fn new(store: Arc<KvStore>, notifier: Arc<NotificationCenter>) -> Self {
        let settings = PomodoroSettings::default();
        Self {
            store,
            notifier,
            settings,
            phase: PomodoroPhase::Work,
            remaining_secs: settings.work_minutes * 60,
            running: false,
            status: WidgetStatus::Uninitialized,
        }
    }

    pub fn load(&mut self) {
        let settings: PomodoroSettings = self.store.get(SETTINGS_KEY).unwrap_or_default();
        self.settings = if valid_minutes(settings.work_minutes) && valid_minutes(settings.break_minutes)
        {
            settings
        } else {
            PomodoroSettings::default()
        };
        self.phase = PomodoroPhase::Work;
        self.remaining_secs = self.settings.work_minutes * 60;
        self.running = false;
        self.status = WidgetStatus::Ready;
    }

    /// Starting an already-running timer is a no-op.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Pausing an already-paused timer is a no-op.
    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn reset(&mut self) {
        self.pause();
        self.phase = PomodoroPhase::Work;
        self.remaining_secs = self.settings.work_minutes * 60;
    }

    /// Out-of-range durations are rejected without persisting. A stopped
    /// timer picks the new work duration up immediately.
    pub fn update_settings(&mut self, work_minutes: u32, break_minutes: u32) -> bool {
        if !valid_minutes(work_minutes) || !valid_minutes(break_minutes) {
            return false;
        }

        self.settings = PomodoroSettings {
            work_minutes,
            break_minutes,
        };
        write_through(&self.store, &self.notifier, SETTINGS_KEY, &self.settings);
        if !self.running {
            self.reset();
        }
        true
    }

    /// Advances the countdown by one second while running.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.complete();
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn phase(&self) -> PomodoroPhase {
        self.phase
    }

    fn complete(&mut self) {
        self.running = false;

        let message = match self.phase {
            PomodoroPhase::Work => "Work session complete! Time for a break.",
            PomodoroPhase::Break => "Break complete! Ready for another work session.",
        };
        self.notifier.notify(
            NotificationKind::Success,
            "Pomodoro Complete",
            message,
            true,
        );

        self.phase = match self.phase {
            PomodoroPhase::Work => PomodoroPhase::Break,
            PomodoroPhase::Break => PomodoroPhase::Work,
        };
        self.remaining_secs = match self.phase {
            PomodoroPhase::Work => self.settings.work_minutes * 60,
            PomodoroPhase::Break => self.settings.break_minutes * 60,
        };

        // The next session starts on its own.
        self.running = true;
    }

    pub fn render(&self) -> PomodoroView {
        PomodoroView {
            clock: format!("{:02}:{:02}", self.remaining_secs / 60, self.remaining_secs % 60),
            phase: self.phase,
            running: self.running,
        }
    }
}

fn valid_minutes(minutes: u32) -> bool {
    (1..=MAX_PHASE_MINUTES).contains(&minutes)
}

impl Widget for PomodoroWidget {
    fn name(&self) -> &'static str {
        "pomodoro"
    }

    fn status(&self) -> WidgetStatus {
        self.status
    }
}
