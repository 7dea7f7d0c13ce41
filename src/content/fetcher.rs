//! Page fetch + extraction orchestration

use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

use super::extractor::{extract_article, strip_boilerplate, MIN_ARTICLE_WORDS};
use crate::text::word_count;

const FETCH_TIMEOUT_SECS: u64 = 10;

/// Fetches a page and extracts its article text
pub struct FullTextExtractor {
    client: Client,
}

impl FullTextExtractor {
    /// Create a new extractor with its own HTTP client
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64)")
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Fetch `url` and extract its full text.
    ///
    /// Primary structured extraction first; when that yields nothing or
    /// fewer than [`MIN_ARTICLE_WORDS`] words, the raw body goes through the
    /// boilerplate-removal fallback. Returns `None` on any fetch failure —
    /// the orchestrator treats that as "unavailable", not as an error.
    pub async fn extract(&self, url: &str) -> Option<String> {
        let html = match self.fetch(url).await {
            Ok(html) => html,
            Err(e) => {
                warn!("Full text extraction error for {}: {}", url, e);
                return None;
            }
        };

        let text = extract_article(&html);
        if word_count(&text) >= MIN_ARTICLE_WORDS {
            debug!("Structured extraction: {} chars from {}", text.len(), url);
            return Some(text);
        }

        let fallback = strip_boilerplate(&html);
        debug!(
            "Boilerplate fallback: {} chars from {}",
            fallback.len(),
            url
        );
        Some(fallback)
    }

    async fn fetch(&self, url: &str) -> Result<String, reqwest::Error> {
        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        response.text().await
    }
}

impl Default for FullTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}
