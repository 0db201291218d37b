use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use super::{build_client, ApiError};
use crate::models::Quote;

const RANDOM_QUOTE_URL: &str = "https://api.quotable.io/random";

#[derive(Deserialize)]
struct QuoteResponse {
    content: String,
    author: String,
}

pub struct QuoteClient {
    client: Client,
}

impl QuoteClient {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: build_client(timeout),
        }
    }

    pub async fn random(&self) -> Result<Quote, ApiError> {
        let response = self.client.get(RANDOM_QUOTE_URL).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        let quote: QuoteResponse = response.json().await?;
        Ok(Quote {
            text: quote.content,
            author: quote.author,
        })
    }
}
