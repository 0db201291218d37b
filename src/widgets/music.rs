use std::sync::Arc;

use crate::models::{sample_tracks, MusicSource, MusicView, Track};
use crate::services::notifications::NotificationCenter;
use crate::storage::KvStore;
use crate::widgets::{write_through, Widget, WidgetStatus};

const SOURCE_KEY: &str = "musicSource";

pub struct MusicWidget {
    store: Arc<KvStore>,
    notifier: Arc<NotificationCenter>,
    source: MusicSource,
    tracks: Vec<Track>,
    current: usize,
    playing: bool,
    status: WidgetStatus,
}

impl MusicWidget {
    pub fn new(store: Arc<KvStore>, notifier: Arc<NotificationCenter>) -> Self {
        Self {
            store,
            notifier,
            source: MusicSource::default(),
            tracks: sample_tracks(),
            current: 0,
            playing: false,
            status: WidgetStatus::Uninitialized,
        }
    }

    pub fn load(&mut self) {
        self.source = self.store.get(SOURCE_KEY).unwrap_or_default();
        self.status = WidgetStatus::Ready;
    }

    pub fn set_source(&mut self, source: MusicSource) {
        self.source = source;
        write_through(&self.store, &self.notifier, SOURCE_KEY, &self.source);
    }

    pub fn toggle_play(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    pub fn next_track(&mut self) {
        if self.tracks.is_empty() {
            return;
        }
        self.current = (self.current + 1) % self.tracks.len();
    }

    pub fn previous_track(&mut self) {
        if self.tracks.is_empty() {
            return;
        }
        self.current = (self.current + self.tracks.len() - 1) % self.tracks.len();
    }

    pub fn render(&self) -> MusicView {
        let track = self.tracks.get(self.current);
        MusicView {
            source: self.source,
            playing: self.playing,
            track_title: track.map(|t| t.title.clone()).unwrap_or_default(),
            track_artist: track.map(|t| t.artist.clone()).unwrap_or_default(),
        }
    }
}

impl Widget for MusicWidget {
    fn name(&self) -> &'static str {
        "music"
    }

    fn status(&self) -> WidgetStatus {
        self.status
    }
}
