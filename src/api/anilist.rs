use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use super::{build_client, ApiError};
use crate::models::{AnimeEntry, AnimeFeed};

const GRAPHQL_URL: &str = "https://graphql.anilist.co";
const PAGE_SIZE: u32 = 10;

#[derive(Deserialize)]
struct GraphQlResponse {
    data: Option<PageData>,
}

#[derive(Deserialize)]
struct PageData {
    #[serde(rename = "Page")]
    page: Page,
}

#[derive(Deserialize)]
struct Page {
    media: Vec<Media>,
}

#[derive(Deserialize)]
struct Media {
    id: i64,
    title: MediaTitle,
    #[serde(rename = "coverImage")]
    cover_image: CoverImage,
    #[serde(rename = "averageScore", default)]
    average_score: Option<u32>,
    #[serde(default)]
    season: Option<String>,
    #[serde(rename = "seasonYear", default)]
    season_year: Option<i32>,
}

#[derive(Deserialize)]
struct MediaTitle {
    english: Option<String>,
    romaji: Option<String>,
}

#[derive(Deserialize)]
struct CoverImage {
    medium: Option<String>,
}

pub struct AniListClient {
    client: Client,
}

impl AniListClient {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: build_client(timeout),
        }
    }

    pub async fn browse(&self, feed: AnimeFeed) -> Result<Vec<AnimeEntry>, ApiError> {
        let filter = match feed {
            AnimeFeed::Trending => "sort: TRENDING_DESC",
            AnimeFeed::Upcoming => "sort: POPULARITY_DESC, status_in: [NOT_YET_RELEASED]",
            AnimeFeed::Releasing => "sort: POPULARITY_DESC, status_in: [RELEASING]",
        };
        let query = format!(
            "query {{
                Page(page: 1, perPage: {PAGE_SIZE}) {{
                    media(type: ANIME, {filter}) {{
                        id
                        title {{ english romaji }}
                        coverImage {{ medium }}
                        averageScore
                        season
                        seasonYear
                    }}
                }}
            }}"
        );

        let response = self
            .client
            .post(GRAPHQL_URL)
            .json(&serde_json::json!({ "query": query }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        let body: GraphQlResponse = response.json().await?;
        let page = body.data.ok_or(ApiError::Shape("missing data page"))?.page;

        Ok(page.media.into_iter().map(into_entry).collect())
    }
}

fn into_entry(media: Media) -> AnimeEntry {
    let title = media
        .title
        .english
        .or(media.title.romaji)
        .unwrap_or_else(|| "Untitled".to_string());
    let season_label = match (media.season, media.season_year) {
        (Some(season), Some(year)) => format!("{} {}", season, year),
        (Some(season), None) => season,
        _ => "TBA".to_string(),
    };

    AnimeEntry {
        id: media.id,
        title,
        cover_url: media.cover_image.medium.unwrap_or_default(),
        score: media.average_score,
        season_label,
    }
}
