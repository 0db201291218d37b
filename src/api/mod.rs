use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

pub mod anilist;
pub mod github;
pub mod quotes;
pub mod weather;
pub mod youtube;

pub use anilist::AniListClient;
pub use github::GithubClient;
pub use quotes::QuoteClient;
pub use weather::WeatherClient;
pub use youtube::YouTubeClient;

/// Failure of a single provider call. Every call is one attempt with a
/// request timeout; retries are user-initiated through a refresh.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("api key not configured")]
    MissingKey,
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("provider returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("unexpected response shape: {0}")]
    Shape(&'static str),
}

pub(crate) fn build_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("homeboard/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| Client::new())
}
