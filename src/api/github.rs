use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use super::{build_client, ApiError};
use crate::models::CodeHostStats;

const API_BASE: &str = "https://api.github.com";

#[derive(Deserialize)]
struct UserResponse {
    public_repos: u32,
    followers: u32,
}

#[derive(Deserialize)]
struct RepoResponse {
    stargazers_count: u64,
}

pub struct GithubClient {
    client: Client,
}

impl GithubClient {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: build_client(timeout),
        }
    }

    /// Profile counters plus stars summed over the user's public repos.
    pub async fn user_stats(&self, username: &str) -> Result<CodeHostStats, ApiError> {
        if username.is_empty() {
            return Err(ApiError::MissingKey);
        }

        let response = self
            .client
            .get(format!("{}/users/{}", API_BASE, username))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        let user: UserResponse = response.json().await?;

        let response = self
            .client
            .get(format!("{}/users/{}/repos", API_BASE, username))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        let repos: Vec<RepoResponse> = response.json().await?;
        let stars = repos.iter().map(|repo| repo.stargazers_count).sum();

        Ok(CodeHostStats {
            repos: user.public_repos,
            followers: user.followers,
            stars,
        })
    }
}
