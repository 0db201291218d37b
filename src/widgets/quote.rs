use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;

use crate::api::QuoteClient;
use crate::models::{sample_quotes, NotificationKind, Quote, QuoteView};
use crate::services::notifications::NotificationCenter;
use crate::storage::{CachedFetch, KvStore};
use crate::widgets::{write_through, Widget, WidgetStatus};

const BOOKMARKS_KEY: &str = "bookmarkedQuotes";
const QUOTE_KEY: &str = "quoteOfTheDay";

pub struct QuoteWidget {
    store: Arc<KvStore>,
    notifier: Arc<NotificationCenter>,
    cache: Arc<CachedFetch>,
    client: QuoteClient,
    current: Option<Quote>,
    status: WidgetStatus,
}

impl QuoteWidget {
    pub fn new(
        store: Arc<KvStore>,
        notifier: Arc<NotificationCenter>,
        cache: Arc<CachedFetch>,
        client: QuoteClient,
    ) -> Self {
        Self {
            store,
            notifier,
            cache,
            client,
            current: None,
            status: WidgetStatus::Uninitialized,
        }
    }

    /// Fetches a fresh random quote on every call (zero TTL); provider
    /// failure rotates through the built-in quotes instead.
    pub async fn load(&mut self) {
        self.status = WidgetStatus::Loading;
        let client = &self.client;
        let mut degraded = false;

        let quote = self
            .cache
            .load(
                QUOTE_KEY,
                "Quote",
                Duration::ZERO,
                || async move { client.random().await.map_err(anyhow::Error::from) },
                || {
                    degraded = true;
                    fallback_quote()
                },
                false,
            )
            .await;

        self.current = Some(quote);
        self.status = if degraded {
            WidgetStatus::Degraded
        } else {
            WidgetStatus::Ready
        };
    }

    /// Bookmarks the current quote, deduplicating on text and author.
    pub fn bookmark_current(&mut self) -> bool {
        let Some(current) = &self.current else {
            return false;
        };

        let mut bookmarks = self.bookmarks();
        if bookmarks.iter().any(|q| q == current) {
            self.notifier.notify(
                NotificationKind::Info,
                "Already Bookmarked",
                "This quote is already in your bookmarks.",
                false,
            );
            return false;
        }

        bookmarks.push(current.clone());
        write_through(&self.store, &self.notifier, BOOKMARKS_KEY, &bookmarks);
        self.notifier.notify(
            NotificationKind::Success,
            "Quote Bookmarked",
            "Quote added to your bookmarks.",
            false,
        );
        true
    }

    pub fn bookmarks(&self) -> Vec<Quote> {
        self.store.get(BOOKMARKS_KEY).unwrap_or_default()
    }

    pub fn render(&self) -> QuoteView {
        match &self.current {
            Some(quote) => QuoteView {
                text: quote.text.clone(),
                author_line: format!("- {}", quote.author),
                bookmarked: self.bookmarks().iter().any(|q| q == quote),
            },
            None => QuoteView {
                text: String::new(),
                author_line: String::new(),
                bookmarked: false,
            },
        }
    }
}

fn fallback_quote() -> Quote {
    let mut quotes = sample_quotes();
    let index = Utc::now().timestamp_millis() as usize % quotes.len();
    quotes.swap_remove(index)
}

impl Widget for QuoteWidget {
    fn name(&self) -> &'static str {
        "quote"
    }

    fn status(&self) -> WidgetStatus {
        self.status
    }
}
