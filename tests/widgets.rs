use homeboard::models::{AnalyticsCategory, MusicSource, NotificationKind};
use homeboard::services::NotificationCenter;
use homeboard::storage::KvStore;
use homeboard::widgets::theme::WALLPAPERS;
use homeboard::widgets::{
    AnalyticsWidget, FilesWidget, MusicWidget, NotesWidget, ThemeWidget,
};
use std::sync::Arc;

fn services() -> (Arc<KvStore>, Arc<NotificationCenter>) {
    let store = Arc::new(KvStore::in_memory().expect("store opens"));
    let session = Arc::new(KvStore::in_memory().expect("store opens"));
    (store, Arc::new(NotificationCenter::new(session)))
}

#[test]
fn theme_rejects_unknown_names_and_cycles_wallpapers() {
    let (store, notifier) = services();
    let mut theme = ThemeWidget::new(store, notifier);
    theme.load();

    assert_eq!(theme.render().theme, "dark");
    assert!(theme.set_theme("light"));
    assert_eq!(theme.render().theme, "light");

    assert!(!theme.set_theme("neon"));
    assert_eq!(theme.render().theme, "light");

    assert!(!theme.set_wallpaper(WALLPAPERS.len()));

    for _ in 0..WALLPAPERS.len() {
        theme.next_wallpaper();
    }
    assert_eq!(theme.render().wallpaper_index, 0);

    theme.set_wallpaper(WALLPAPERS.len() - 1);
    assert!(theme.render().is_gradient);
}

#[test]
fn theme_preferences_survive_reload() {
    let (store, notifier) = services();

    let mut theme = ThemeWidget::new(store.clone(), notifier.clone());
    theme.load();
    theme.set_theme("anime");
    theme.set_wallpaper(1);

    let mut reloaded = ThemeWidget::new(store, notifier);
    reloaded.load();
    assert_eq!(reloaded.render().theme, "anime");
    assert_eq!(reloaded.render().wallpaper_index, 1);
}

#[test]
fn music_persists_source_and_wraps_track_navigation() {
    let (store, notifier) = services();

    let mut music = MusicWidget::new(store.clone(), notifier.clone());
    music.load();
    assert_eq!(music.render().source, MusicSource::Spotify);

    music.set_source(MusicSource::Local);
    assert!(music.toggle_play());

    let first_title = music.render().track_title.clone();
    music.next_track();
    assert_ne!(music.render().track_title, first_title);
    music.previous_track();
    assert_eq!(music.render().track_title, first_title);

    // Wrapping backwards from the first track lands on the last.
    music.previous_track();
    assert_ne!(music.render().track_title, first_title);

    let mut reloaded = MusicWidget::new(store, notifier);
    reloaded.load();
    assert_eq!(reloaded.render().source, MusicSource::Local);
}

#[test]
fn notes_write_through_and_reload() {
    let (store, notifier) = services();

    let mut notes = NotesWidget::new(store.clone(), notifier.clone());
    notes.load();
    assert_eq!(notes.notes(), "");

    notes.set_notes("remember the milk");
    assert_eq!(notes.render().characters, 17);

    let mut reloaded = NotesWidget::new(store, notifier);
    reloaded.load();
    assert_eq!(reloaded.notes(), "remember the milk");
}

#[test]
fn files_reject_blank_names_and_meter_usage() {
    let (store, notifier) = services();
    let mut files = FilesWidget::new(store, notifier.clone());
    files.load();

    assert!(!files.add_file("  ", 100, "text/plain", 0));
    assert!(files.files().is_empty());
    assert_eq!(notifier.all()[0].kind, NotificationKind::Error);

    assert!(files.add_file("report.pdf", 50 * 1024 * 1024, "application/pdf", 1));
    assert_eq!(files.files().len(), 1);

    let view = files.render();
    assert_eq!(view.file_count, 1);
    assert_eq!(view.used_label, "50.00 MB / 100 MB");
    assert!((view.percent - 50.0).abs() < 0.01);

    let preview = view.latest.expect("latest upload is previewed");
    assert_eq!(preview.name, "report.pdf");
    assert_eq!(preview.size_label, "50 MB");

    // Usage is capped at the budget.
    assert!(files.add_file("huge.bin", 200 * 1024 * 1024, "application/octet-stream", 2));
    assert!((files.render().percent - 100.0).abs() < 0.01);
}

#[test]
fn analytics_seeds_sample_data_and_validates_mutations() {
    let (store, notifier) = services();
    let mut analytics = AnalyticsWidget::new(store.clone(), notifier);
    analytics.load();

    let view = analytics.render();
    assert_eq!(view.labels.len(), 7);
    assert_eq!(view.anime_total, 27);
    assert_eq!(view.manga_total, 17);

    // Sample data was persisted on first use.
    assert!(store
        .get::<homeboard::models::AnalyticsData>("analyticsData")
        .is_some());

    assert!(analytics.record(AnalyticsCategory::Anime, 0));
    assert_eq!(analytics.render().anime_total, 28);
    assert!(!analytics.record(AnalyticsCategory::Anime, 7));

    let mut bad = analytics.data().clone();
    bad.manga.push(9);
    assert!(!analytics.replace_series(bad));
    assert_eq!(analytics.render().manga_total, 17);

    assert_eq!(analytics.render(), analytics.render());
}
