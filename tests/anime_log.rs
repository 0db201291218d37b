use homeboard::api::AniListClient;
use homeboard::models::NotificationKind;
use homeboard::services::NotificationCenter;
use homeboard::storage::KvStore;
use homeboard::widgets::AnimeWidget;
use std::sync::Arc;
use std::time::Duration;

fn widget() -> (AnimeWidget, Arc<NotificationCenter>) {
    let store = Arc::new(KvStore::in_memory().expect("store opens"));
    let session = Arc::new(KvStore::in_memory().expect("store opens"));
    let notifier = Arc::new(NotificationCenter::new(session));
    let client = AniListClient::new(Duration::from_secs(1));
    (AnimeWidget::new(store, notifier.clone(), client), notifier)
}

#[test]
fn invalid_backups_are_rejected_with_an_error() {
    let (mut anime, notifier) = widget();

    assert!(!anime.import_log("not json at all"));
    let log = notifier.all();
    assert_eq!(log[0].kind, NotificationKind::Error);
    assert_eq!(log[0].title, "Import Failed");

    // Nothing was stored.
    assert_eq!(anime.watch_summary(2025).total_anime, 0);
}

#[test]
fn watch_summary_aggregates_by_month_for_the_target_year() {
    let (mut anime, _notifier) = widget();

    let backup = r#"[
        {"finishDate": "2025-01-10", "episodes": 12, "duration": 24},
        {"finishDate": "2025-01-25", "episodes": 24, "duration": 24},
        {"finishDate": "2025-03-09T12:00:00Z", "episodes": 13, "duration": 23},
        {"finishDate": "2024-07-01", "episodes": 50, "duration": 24},
        {"episodes": 10, "duration": 20},
        {"finishDate": "someday", "episodes": 10, "duration": 20}
    ]"#;
    assert!(anime.import_log(backup));

    let summary = anime.watch_summary(2025);
    assert_eq!(summary.total_anime, 3);
    assert_eq!(summary.monthly_completed[0], 2);
    assert_eq!(summary.monthly_completed[2], 1);
    assert_eq!(summary.monthly_completed[6], 0);
    assert_eq!(summary.total_episodes, 12 + 24 + 13);

    let january_hours = (12 * 24 + 24 * 24) as f64 / 60.0;
    assert!((summary.monthly_hours[0] - january_hours).abs() < 0.01);

    // The 2024 entry only counts for its own year.
    assert_eq!(anime.watch_summary(2024).total_anime, 1);
}

#[test]
fn countdown_reports_episode_and_remaining_time() {
    let (anime, _notifier) = widget();

    // Before load the countdown still renders a placeholder safely.
    let view = anime.render_countdown();
    assert_eq!(view.episode, 1147);
    assert!(!view.released);
}
