use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MusicSource {
    #[default]
    Spotify,
    Local,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    pub artist: String,
}

pub fn sample_tracks() -> Vec<Track> {
    (1..=3)
        .map(|n| Track {
            title: format!("Sample Track {}", n),
            artist: "Unknown Artist".to_string(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MusicView {
    pub source: MusicSource,
    pub playing: bool,
    pub track_title: String,
    pub track_artist: String,
}
