use chrono::DateTime;
use log::warn;
use std::sync::Arc;

use crate::api::{GithubClient, YouTubeClient};
use crate::models::{ChannelStats, CodeHostStats, NotificationKind, SocialView};
use crate::services::notifications::NotificationCenter;
use crate::utils::format::format_compact;
use crate::widgets::{Widget, WidgetStatus};

pub struct SocialWidget {
    notifier: Arc<NotificationCenter>,
    youtube: YouTubeClient,
    github: GithubClient,
    channel_id: String,
    username: String,
    channel: Option<ChannelStats>,
    code_host: Option<CodeHostStats>,
    status: WidgetStatus,
}

impl SocialWidget {
    pub fn new(
        notifier: Arc<NotificationCenter>,
        youtube: YouTubeClient,
        github: GithubClient,
        channel_id: String,
        username: String,
    ) -> Self {
        Self {
            notifier,
            youtube,
            github,
            channel_id,
            username,
            channel: None,
            code_host: None,
            status: WidgetStatus::Uninitialized,
        }
    }

    /// Fetches both stat sources concurrently; each degrades to sample
    /// numbers on its own, so one provider's outage never blanks the other.
    pub async fn load(&mut self) {
        self.status = WidgetStatus::Loading;

        let (channel, code_host) = tokio::join!(
            self.youtube.channel_stats(&self.channel_id),
            self.github.user_stats(&self.username),
        );

        let mut degraded = false;

        self.channel = Some(match channel {
            Ok(stats) => stats,
            Err(err) => {
                warn!("[Social] channel stats failed: {}", err);
                self.notifier.notify(
                    NotificationKind::Warning,
                    "Channel Stats",
                    "Using sample statistics. Check rate limits or connection.",
                    false,
                );
                degraded = true;
                mock_channel_stats()
            }
        });

        self.code_host = Some(match code_host {
            Ok(stats) => stats,
            Err(err) => {
                warn!("[Social] code host stats failed: {}", err);
                self.notifier.notify(
                    NotificationKind::Warning,
                    "Code Host Stats",
                    "Using sample statistics. Check rate limits or connection.",
                    false,
                );
                degraded = true;
                mock_code_host_stats()
            }
        });

        self.status = if degraded {
            WidgetStatus::Degraded
        } else {
            WidgetStatus::Ready
        };
    }

    pub fn render(&self) -> SocialView {
        let (channel_title, joined, subscribers, views, videos) = match &self.channel {
            Some(c) => (
                c.title.clone(),
                joined_label(c.published_at.as_deref()),
                format_compact(c.subscribers),
                format_compact(c.views),
                c.videos.to_string(),
            ),
            None => (
                "—".to_string(),
                String::new(),
                "—".to_string(),
                "—".to_string(),
                "—".to_string(),
            ),
        };

        let (repos, followers, stars) = match &self.code_host {
            Some(s) => (
                s.repos.to_string(),
                s.followers.to_string(),
                s.stars.to_string(),
            ),
            None => ("—".to_string(), "—".to_string(), "—".to_string()),
        };

        SocialView {
            channel_title,
            joined,
            subscribers,
            views,
            videos,
            repos,
            followers,
            stars,
        }
    }
}

fn mock_channel_stats() -> ChannelStats {
    ChannelStats {
        title: "Sample Channel".to_string(),
        subscribers: 1_200,
        views: 45_600,
        videos: 24,
        published_at: None,
    }
}

fn mock_code_host_stats() -> CodeHostStats {
    CodeHostStats {
        repos: 12,
        followers: 45,
        stars: 89,
    }
}

fn joined_label(published_at: Option<&str>) -> String {
    published_at
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|date| format!("Joined: {}", date.format("%B %Y")))
        .unwrap_or_default()
}

impl Widget for SocialWidget {
    fn name(&self) -> &'static str {
        "social"
    }

    fn status(&self) -> WidgetStatus {
        self.status
    }
}
