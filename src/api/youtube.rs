use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use super::{build_client, ApiError};
use crate::models::ChannelStats;

const CHANNELS_URL: &str = "https://www.googleapis.com/youtube/v3/channels";

#[derive(Deserialize)]
struct ChannelsResponse {
    #[serde(default)]
    items: Vec<ChannelItem>,
}

#[derive(Deserialize)]
struct ChannelItem {
    snippet: ChannelSnippet,
    statistics: ChannelStatistics,
}

#[derive(Deserialize)]
struct ChannelSnippet {
    title: String,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
}

// The stats API returns counters as strings.
#[derive(Deserialize)]
struct ChannelStatistics {
    #[serde(rename = "subscriberCount")]
    subscriber_count: String,
    #[serde(rename = "viewCount")]
    view_count: String,
    #[serde(rename = "videoCount")]
    video_count: String,
}

pub struct YouTubeClient {
    client: Client,
    api_key: String,
}

impl YouTubeClient {
    pub fn new(api_key: String, timeout: Duration) -> Self {
        Self {
            client: build_client(timeout),
            api_key,
        }
    }

    pub async fn channel_stats(&self, channel_id: &str) -> Result<ChannelStats, ApiError> {
        if self.api_key.is_empty() || channel_id.is_empty() {
            return Err(ApiError::MissingKey);
        }

        let response = self
            .client
            .get(CHANNELS_URL)
            .query(&[
                ("part", "statistics,snippet"),
                ("id", channel_id),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        let channels: ChannelsResponse = response.json().await?;
        let item = channels
            .items
            .into_iter()
            .next()
            .ok_or(ApiError::Shape("channel not found"))?;

        Ok(ChannelStats {
            title: item.snippet.title,
            subscribers: item.statistics.subscriber_count.parse().unwrap_or(0),
            views: item.statistics.view_count.parse().unwrap_or(0),
            videos: item.statistics.video_count.parse().unwrap_or(0),
            published_at: item.snippet.published_at,
        })
    }
}
