use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelStats {
    pub title: String,
    pub subscribers: u64,
    pub views: u64,
    pub videos: u64,
    /// Provider publish timestamp (RFC 3339) when available.
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeHostStats {
    pub repos: u32,
    pub followers: u32,
    pub stars: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocialView {
    pub channel_title: String,
    pub joined: String,
    pub subscribers: String,
    pub views: String,
    pub videos: String,
    pub repos: String,
    pub followers: String,
    pub stars: String,
}
