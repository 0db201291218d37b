use chrono::{Local, NaiveDate, TimeZone};
use homeboard::services::NotificationCenter;
use homeboard::storage::KvStore;
use homeboard::widgets::ProfileWidget;
use std::sync::Arc;

fn widget() -> ProfileWidget {
    let store = Arc::new(KvStore::in_memory().expect("store opens"));
    let session = Arc::new(KvStore::in_memory().expect("store opens"));
    let notifier = Arc::new(NotificationCenter::new(session));
    ProfileWidget::new(store, notifier)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

#[test]
fn first_visit_starts_the_streak_at_one() {
    let mut profile = widget();
    assert_eq!(profile.record_visit(date(2025, 6, 1)), 1);
}

#[test]
fn consecutive_days_increment_and_gaps_reset() {
    let mut profile = widget();

    assert_eq!(profile.record_visit(date(2025, 6, 1)), 1);
    assert_eq!(profile.record_visit(date(2025, 6, 2)), 2);
    assert_eq!(profile.record_visit(date(2025, 6, 3)), 3);

    // Two-day gap resets.
    assert_eq!(profile.record_visit(date(2025, 6, 6)), 1);
}

#[test]
fn repeat_visits_on_the_same_day_do_not_change_the_streak() {
    let mut profile = widget();

    assert_eq!(profile.record_visit(date(2025, 6, 1)), 1);
    assert_eq!(profile.record_visit(date(2025, 6, 2)), 2);
    assert_eq!(profile.record_visit(date(2025, 6, 2)), 2);
    assert_eq!(profile.record_visit(date(2025, 6, 3)), 3);
}

#[test]
fn streak_crosses_month_boundaries() {
    let mut profile = widget();

    assert_eq!(profile.record_visit(date(2025, 1, 31)), 1);
    assert_eq!(profile.record_visit(date(2025, 2, 1)), 2);
}

#[test]
fn blank_profile_name_falls_back_to_guest() {
    let mut profile = widget();
    profile.save_profile("   ", "");
    assert_eq!(profile.profile().name, "Guest");

    profile.save_profile("Rin", "data:image/png;base64,xyz");
    assert_eq!(profile.profile().name, "Rin");
    assert_eq!(profile.profile().avatar_url, "data:image/png;base64,xyz");
}

#[test]
fn render_builds_greeting_initials_and_streak_label() {
    let mut profile = widget();
    profile.save_profile("rin", "");
    profile.record_visit(date(2025, 6, 1));

    let morning = Local.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
    let view = profile.render_at(morning);
    assert_eq!(view.greeting, "Good morning, rin!");
    assert_eq!(view.initials, "R");
    assert_eq!(view.streak_label, "1 day");

    profile.record_visit(date(2025, 6, 2));
    let evening = Local.with_ymd_and_hms(2025, 6, 2, 20, 0, 0).unwrap();
    assert_eq!(profile.render_at(evening).greeting, "Good evening, rin!");
    assert_eq!(profile.render_at(evening).streak_label, "2 days");
}

#[test]
fn render_is_idempotent_for_unchanged_state() {
    let mut profile = widget();
    profile.save_profile("Aoi", "");
    profile.record_visit(date(2025, 6, 1));

    let at = Local.with_ymd_and_hms(2025, 6, 1, 14, 0, 0).unwrap();
    assert_eq!(profile.render_at(at), profile.render_at(at));
}
