// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Web search pipeline: scrape, window, summarize, categorize, cache
//!
//! A search request flows through [`service::SearchService`]: cache lookup,
//! one result-page scrape, post-hoc windowing, snippet summarization for the
//! top of the window, categorization for the whole window, history append,
//! cache insert. A separate full-summary flow resolves redirect links,
//! extracts article text and runs the chunked summarizer.

pub mod duckduckgo;
pub mod provider;
pub mod redirect;
pub mod service;
pub mod types;

pub use duckduckgo::DuckDuckGoScraper;
pub use provider::SearchProvider;
pub use redirect::resolve_real_url;
pub use service::{SearchService, DEFAULT_LIMIT, MAX_LIMIT, SUMMARIZE_LIMIT};
pub use types::{ScrapeError, SearchResult};
