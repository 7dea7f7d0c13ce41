// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for the search pipeline

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single scraped search result
///
/// `summary` and `category` are filled in by the pipeline stages: the
/// summary only for the leading entries of a window, the category for every
/// entry. The other fields are fixed at parse time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Title of the search result
    pub title: String,
    /// Link as scraped, possibly a redirect-wrapped engine URL
    pub link: String,
    /// Snippet/description shown next to the link
    pub snippet: String,
    /// Snippet summary, populated for the first few entries of a window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Topical category assigned by the categorizer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl SearchResult {
    /// Create a result fresh from the result-page parse
    pub fn new(title: String, link: String, snippet: String) -> Self {
        Self {
            title,
            link,
            snippet,
            summary: None,
            category: None,
        }
    }
}

/// Errors that can occur while scraping the search engine
///
/// These propagate to the caller: a failed scrape is a failed request,
/// unlike the soft failures further down the pipeline.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Scrape request timed out
    #[error("Search timeout after {timeout_ms}ms")]
    Timeout {
        /// Timeout duration in milliseconds
        timeout_ms: u64,
    },

    /// The engine answered with a non-success status
    #[error("Search engine error: {status} - {message}")]
    EngineError {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// The request failed before a response arrived
    #[error("Search request failed: {0}")]
    Http(String),
}
