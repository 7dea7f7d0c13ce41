// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod cache;
pub mod classify;
pub mod config;
pub mod content;
pub mod feedback;
pub mod history;
pub mod model;
pub mod search;
pub mod summarize;
pub mod text;

// Re-export main types
pub use api::{build_router, start_server, AppState};
pub use cache::{BoundedCache, CachedPayload, CACHE_SIZE};
pub use classify::Categorizer;
pub use config::{ModelConfig, NodeConfig};
pub use content::FullTextExtractor;
pub use feedback::{FeedbackRecord, FeedbackStore};
pub use history::{HistoryStore, InMemoryHistoryStore, DEFAULT_USER, HISTORY_LIMIT};
pub use model::{Classifier, HfInferenceClient, ModelError, Summarizer};
pub use search::{
    resolve_real_url, DuckDuckGoScraper, ScrapeError, SearchProvider, SearchResult, SearchService,
    DEFAULT_LIMIT, MAX_LIMIT, SUMMARIZE_LIMIT,
};
pub use summarize::{ChunkedSummarizer, SnippetSummarizer};
pub use text::{clean_text, word_count};
