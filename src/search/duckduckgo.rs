// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! DuckDuckGo result-page scraper
//!
//! Fetches the HTML (non-JS) results page and parses every result block
//! with CSS selectors. No API key required.

use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::debug;

use super::provider::SearchProvider;
use super::types::{ScrapeError, SearchResult};
use crate::text::clean_text;

const DDG_HTML_URL: &str = "https://html.duckduckgo.com/html/";
const FETCH_TIMEOUT_SECS: u64 = 10;

/// Scraper for DuckDuckGo's HTML results page
pub struct DuckDuckGoScraper {
    client: Client,
}

impl DuckDuckGoScraper {
    /// Create a new DuckDuckGo scraper
    pub fn new() -> Self {
        // Use a realistic browser User-Agent to avoid being blocked
        let client = Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64)")
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

impl Default for DuckDuckGoScraper {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchProvider for DuckDuckGoScraper {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ScrapeError> {
        let response = self
            .client
            .get(DDG_HTML_URL)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ScrapeError::Timeout {
                        timeout_ms: FETCH_TIMEOUT_SECS * 1000,
                    }
                } else {
                    ScrapeError::Http(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::EngineError {
                status: status.as_u16(),
                message: "DuckDuckGo request failed".to_string(),
            });
        }

        let html = response
            .text()
            .await
            .map_err(|e| ScrapeError::Http(e.to_string()))?;

        let results = parse_result_page(&html);
        debug!("Parsed {} result blocks for '{}'", results.len(), query);

        Ok(results)
    }

    fn name(&self) -> &'static str {
        "duckduckgo"
    }
}

/// Parse every result block on the page
///
/// A block needs both a `result__a` title link and a `result__snippet`;
/// blocks missing either are skipped. Title and snippet text are cleaned
/// here, the href is kept raw (it may be a redirect-wrapped link that the
/// summary flow resolves later).
fn parse_result_page(html: &str) -> Vec<SearchResult> {
    let document = Html::parse_document(html);

    let (block_sel, title_sel, snippet_sel) = match (
        Selector::parse("div.result"),
        Selector::parse("a.result__a"),
        Selector::parse("a.result__snippet"),
    ) {
        (Ok(b), Ok(t), Ok(s)) => (b, t, s),
        _ => return Vec::new(),
    };

    let mut results = Vec::new();

    for block in document.select(&block_sel) {
        let Some(title_el) = block.select(&title_sel).next() else {
            continue;
        };
        let Some(snippet_el) = block.select(&snippet_sel).next() else {
            continue;
        };
        let Some(href) = title_el.value().attr("href") else {
            continue;
        };

        let title = clean_text(&title_el.text().collect::<String>());
        let snippet = clean_text(&snippet_el.text().collect::<String>());

        results.push(SearchResult::new(title, href.to_string(), snippet));
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESULT_PAGE: &str = r#"
        <html><body>
        <div class="result">
            <a class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Ffirst.example.com">
                First   Result
            </a>
            <a class="result__snippet">Snippet for the <b>first</b> result.</a>
        </div>
        <div class="result">
            <a class="result__a" href="https://second.example.com">Second Result</a>
            <a class="result__snippet">Snippet for the second result.</a>
        </div>
        <div class="result">
            <a class="result__a" href="https://no-snippet.example.com">Malformed block</a>
        </div>
        <div class="result">
            <a class="result__snippet">Block with a snippet but no title link.</a>
        </div>
        </body></html>
    "#;

    #[test]
    fn test_parse_result_page() {
        let results = parse_result_page(SAMPLE_RESULT_PAGE);
        assert_eq!(results.len(), 2);

        assert_eq!(results[0].title, "First Result");
        assert!(results[0].link.starts_with("//duckduckgo.com/l/?"));
        assert_eq!(results[0].snippet, "Snippet for the first result.");

        assert_eq!(results[1].link, "https://second.example.com");
    }

    #[test]
    fn test_malformed_blocks_skipped() {
        let results = parse_result_page(SAMPLE_RESULT_PAGE);
        assert!(results.iter().all(|r| !r.title.contains("Malformed")));
    }

    #[test]
    fn test_title_and_snippet_cleaned() {
        let results = parse_result_page(SAMPLE_RESULT_PAGE);
        // Inner whitespace collapsed, nested tags flattened
        assert!(!results[0].title.contains("  "));
        assert!(!results[0].snippet.contains('<'));
    }

    #[test]
    fn test_parse_empty_page() {
        assert!(parse_result_page("").is_empty());
        assert!(parse_result_page("<html><body></body></html>").is_empty());
    }

    #[test]
    fn test_scraper_creation() {
        let scraper = DuckDuckGoScraper::new();
        assert_eq!(scraper.name(), "duckduckgo");
    }
}
