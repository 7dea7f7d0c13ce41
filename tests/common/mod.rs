// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Shared mocks and state builders for integration tests

// Not every test binary uses every helper
#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use fabstir_search_node::{
    api::AppState, BoundedCache, Classifier, FeedbackStore, FullTextExtractor, HistoryStore,
    InMemoryHistoryStore, ModelError, ScrapeError, SearchProvider, SearchResult, SearchService,
    Summarizer, CACHE_SIZE,
};

/// Provider returning a canned result page, counting scrapes
pub struct MockProvider {
    pub results: Vec<SearchResult>,
    pub calls: Arc<AtomicUsize>,
    pub fail: bool,
}

impl MockProvider {
    pub fn with_results(count: usize) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let results = (0..count)
            .map(|i| {
                SearchResult::new(
                    format!("Result {i}"),
                    format!("https://example.com/{i}"),
                    format!("Snippet text number {i}"),
                )
            })
            .collect();
        (
            Self {
                results,
                calls: calls.clone(),
                fail: false,
            },
            calls,
        )
    }

    pub fn failing() -> Self {
        Self {
            results: vec![],
            calls: Arc::new(AtomicUsize::new(0)),
            fail: true,
        }
    }
}

#[async_trait]
impl SearchProvider for MockProvider {
    async fn search(&self, _query: &str) -> Result<Vec<SearchResult>, ScrapeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ScrapeError::EngineError {
                status: 503,
                message: "engine down".to_string(),
            });
        }
        Ok(self.results.clone())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

/// Summarizer producing a recognizable summary, counting invocations
pub struct MockSummarizer {
    pub calls: Arc<AtomicUsize>,
}

impl MockSummarizer {
    pub fn new() -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                calls: calls.clone(),
            },
            calls,
        )
    }
}

#[async_trait]
impl Summarizer for MockSummarizer {
    async fn summarize(
        &self,
        text: &str,
        _min_length: usize,
        _max_length: usize,
    ) -> Result<String, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let first_word = text.split_whitespace().next().unwrap_or_default();
        Ok(format!("summary of {first_word}"))
    }
}

/// Classifier ranking a fixed label first
pub struct MockClassifier {
    pub top: String,
}

#[async_trait]
impl Classifier for MockClassifier {
    async fn classify(&self, _text: &str, labels: &[&str]) -> Result<Vec<String>, ModelError> {
        let mut ranked: Vec<String> = labels.iter().map(|s| s.to_string()).collect();
        ranked.retain(|l| *l != self.top);
        ranked.insert(0, self.top.clone());
        Ok(ranked)
    }
}

/// Build full app state over a mock provider
pub fn state_with_provider(provider: Box<dyn SearchProvider>) -> AppState {
    let history: Arc<dyn HistoryStore> = Arc::new(InMemoryHistoryStore::new());
    let (summarizer, _) = MockSummarizer::new();
    let classifier = MockClassifier {
        top: "General".to_string(),
    };

    let search = Arc::new(SearchService::new(
        provider,
        Arc::new(BoundedCache::new(CACHE_SIZE)),
        Arc::new(summarizer),
        Arc::new(classifier),
        history.clone(),
        FullTextExtractor::new(),
    ));

    AppState {
        search,
        feedback: Arc::new(FeedbackStore::new()),
        history,
    }
}
