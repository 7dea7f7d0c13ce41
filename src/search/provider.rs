// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search provider trait definition

use async_trait::async_trait;

use super::types::{ScrapeError, SearchResult};

/// Trait for scraping one page of engine results
///
/// The orchestrator talks to the engine through this seam so tests can
/// substitute a canned provider. One call fetches the engine's first result
/// page in full; windowing happens afterwards in the orchestrator.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Scrape every result block on the engine's first results page
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ScrapeError>;

    /// Provider name for logging
    fn name(&self) -> &'static str;
}
