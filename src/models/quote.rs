use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

/// Built-in quotes shown when the provider is unreachable.
pub fn sample_quotes() -> Vec<Quote> {
    vec![
        Quote {
            text: "The only way to do great work is to love what you do.".to_string(),
            author: "Steve Jobs".to_string(),
        },
        Quote {
            text: "Life is what happens to you while you're busy making other plans.".to_string(),
            author: "John Lennon".to_string(),
        },
        Quote {
            text: "The future belongs to those who believe in the beauty of their dreams."
                .to_string(),
            author: "Eleanor Roosevelt".to_string(),
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteView {
    pub text: String,
    pub author_line: String,
    pub bookmarked: bool,
}
