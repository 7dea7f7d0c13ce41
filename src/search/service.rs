// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search pipeline orchestration
//!
//! Coordinates the scraper, summarizers, categorizer, history store and the
//! shared cache. Stages run sequentially within a request.

use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::provider::SearchProvider;
use super::redirect::resolve_real_url;
use super::types::{ScrapeError, SearchResult};
use crate::cache::{BoundedCache, CachedPayload};
use crate::classify::Categorizer;
use crate::content::FullTextExtractor;
use crate::history::{HistoryStore, DEFAULT_USER};
use crate::model::{Classifier, Summarizer};
use crate::summarize::{ChunkedSummarizer, SnippetSummarizer, MIN_SUMMARIZABLE_WORDS};
use crate::text::word_count;

/// Default window size for a search request
pub const DEFAULT_LIMIT: usize = 20;

/// Largest allowed window size
pub const MAX_LIMIT: usize = 80;

/// How many leading entries of a window get a snippet summary
pub const SUMMARIZE_LIMIT: usize = 5;

/// Summary returned when nothing could be extracted from a page
pub const UNAVAILABLE_SUMMARY: &str = "Full content unavailable or could not be extracted.";

/// Orchestrates the search and full-summary pipelines
pub struct SearchService {
    provider: Box<dyn SearchProvider>,
    cache: Arc<BoundedCache>,
    snippet_summarizer: SnippetSummarizer,
    chunked_summarizer: ChunkedSummarizer,
    categorizer: Categorizer,
    history: Arc<dyn HistoryStore>,
    extractor: FullTextExtractor,
}

impl SearchService {
    /// Wire up the pipeline from its injected collaborators
    pub fn new(
        provider: Box<dyn SearchProvider>,
        cache: Arc<BoundedCache>,
        summarizer: Arc<dyn Summarizer>,
        classifier: Arc<dyn Classifier>,
        history: Arc<dyn HistoryStore>,
        extractor: FullTextExtractor,
    ) -> Self {
        Self {
            provider,
            cache,
            snippet_summarizer: SnippetSummarizer::new(summarizer.clone()),
            chunked_summarizer: ChunkedSummarizer::new(summarizer),
            categorizer: Categorizer::new(classifier),
            history,
            extractor,
        }
    }

    /// Run a search and return the `[start, start+limit)` window.
    ///
    /// A cache hit short-circuits the whole pipeline: no scrape, no model
    /// calls, no history append. On a miss the engine's first results page
    /// is scraped once and the window applied to it post-hoc, so a `start`
    /// past the page's result count yields an empty window. Scrape failures
    /// propagate; everything after the scrape degrades softly.
    pub async fn search(
        &self,
        query: &str,
        start: usize,
        limit: usize,
    ) -> Result<Vec<SearchResult>, ScrapeError> {
        let cache_key = format!("{query}:{start}:{limit}");
        if let Some(CachedPayload::Results(results)) = self.cache.get(&cache_key) {
            debug!("Cache hit for key: {}", cache_key);
            return Ok(results);
        }

        let started = Instant::now();
        let all_results = self.provider.search(query).await?;

        let mut selected: Vec<SearchResult> =
            all_results.into_iter().skip(start).take(limit).collect();

        let snippets: Vec<String> = selected
            .iter()
            .take(SUMMARIZE_LIMIT)
            .map(|r| r.snippet.clone())
            .collect();
        let summaries = self.snippet_summarizer.summarize_many(&snippets).await;
        for (result, summary) in selected.iter_mut().zip(summaries) {
            result.summary = Some(summary);
        }

        for result in selected.iter_mut() {
            result.category = Some(self.categorizer.categorize(&result.snippet, query).await);
        }

        self.history.save(DEFAULT_USER, query).await;

        self.cache
            .insert(cache_key, CachedPayload::Results(selected.clone()));

        info!(
            "Returning {} results for '{}' via {} in {}ms",
            selected.len(),
            query,
            self.provider.name(),
            started.elapsed().as_millis()
        );

        Ok(selected)
    }

    /// Produce a full-page summary for a result link.
    ///
    /// Resolves redirect-wrapped links first and caches under the resolved
    /// URL. Extraction failure degrades to [`UNAVAILABLE_SUMMARY`], which is
    /// deliberately not cached so a flaky page gets retried next time.
    pub async fn full_summary(&self, url: &str) -> String {
        let real_url = resolve_real_url(url);
        let cache_key = format!("full_summary:{real_url}");
        if let Some(CachedPayload::Summary(summary)) = self.cache.get(&cache_key) {
            debug!("Cache hit for summary: {}", real_url);
            return summary;
        }

        let full_text = match self.extractor.extract(&real_url).await {
            Some(text) if !text.trim().is_empty() => text,
            _ => return UNAVAILABLE_SUMMARY.to_string(),
        };

        let summary = if word_count(&full_text) < MIN_SUMMARIZABLE_WORDS {
            full_text
        } else {
            self.chunked_summarizer.summarize(&full_text).await
        };

        self.cache
            .insert(cache_key, CachedPayload::Summary(summary.clone()));

        summary
    }

    /// Cache statistics for diagnostics
    pub fn cache_stats(&self) -> crate::cache::CacheStats {
        self.cache.stats()
    }
}
