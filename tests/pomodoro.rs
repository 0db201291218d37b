use homeboard::models::{NotificationKind, PomodoroPhase};
use homeboard::services::NotificationCenter;
use homeboard::storage::KvStore;
use homeboard::widgets::PomodoroWidget;
use std::sync::Arc;

fn widget() -> (PomodoroWidget, Arc<NotificationCenter>) {
    let store = Arc::new(KvStore::in_memory().expect("store opens"));
    let session = Arc::new(KvStore::in_memory().expect("store opens"));
    let notifier = Arc::new(NotificationCenter::new(session));
    let mut pomodoro = PomodoroWidget::new(store, notifier.clone());
    pomodoro.load();
    (pomodoro, notifier)
}

#[test]
fn defaults_to_a_stopped_25_minute_work_session() {
    let (pomodoro, _notifier) = widget();
    let view = pomodoro.render();
    assert_eq!(view.clock, "25:00");
    assert_eq!(view.phase, PomodoroPhase::Work);
    assert!(!view.running);
}

#[test]
fn ticking_while_stopped_changes_nothing() {
    let (mut pomodoro, _notifier) = widget();
    pomodoro.tick();
    pomodoro.tick();
    assert_eq!(pomodoro.render().clock, "25:00");
}

#[test]
fn start_and_pause_are_idempotent() {
    let (mut pomodoro, _notifier) = widget();

    pomodoro.start();
    pomodoro.start();
    assert!(pomodoro.is_running());
    pomodoro.tick();
    assert_eq!(pomodoro.render().clock, "24:59");

    pomodoro.pause();
    pomodoro.pause();
    assert!(!pomodoro.is_running());
}

#[test]
fn completing_a_work_session_switches_to_break_and_auto_starts() {
    let (mut pomodoro, notifier) = widget();
    assert!(pomodoro.update_settings(1, 1));

    pomodoro.start();
    for _ in 0..60 {
        pomodoro.tick();
    }

    assert_eq!(pomodoro.phase(), PomodoroPhase::Break);
    assert!(pomodoro.is_running());
    assert_eq!(pomodoro.render().clock, "01:00");

    let log = notifier.all();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].kind, NotificationKind::Success);
    assert_eq!(log[0].title, "Pomodoro Complete");
    assert!(log[0].sticky);
    assert!(log[0].message.contains("break"));

    // Finishing the break flips back to work.
    for _ in 0..60 {
        pomodoro.tick();
    }
    assert_eq!(pomodoro.phase(), PomodoroPhase::Work);
    assert!(notifier.all()[0].message.contains("another work session"));
}

#[test]
fn reset_returns_to_a_stopped_work_phase() {
    let (mut pomodoro, _notifier) = widget();
    assert!(pomodoro.update_settings(2, 1));

    pomodoro.start();
    for _ in 0..30 {
        pomodoro.tick();
    }
    pomodoro.reset();

    let view = pomodoro.render();
    assert_eq!(view.clock, "02:00");
    assert_eq!(view.phase, PomodoroPhase::Work);
    assert!(!view.running);
}

#[test]
fn out_of_range_settings_are_rejected() {
    let (mut pomodoro, _notifier) = widget();
    assert!(!pomodoro.update_settings(0, 5));
    assert!(!pomodoro.update_settings(25, 0));
    assert!(!pomodoro.update_settings(181, 5));
    assert_eq!(pomodoro.render().clock, "25:00");
}

#[test]
fn settings_change_applies_immediately_when_stopped() {
    let (mut pomodoro, _notifier) = widget();
    assert!(pomodoro.update_settings(50, 10));
    assert_eq!(pomodoro.render().clock, "50:00");
}
