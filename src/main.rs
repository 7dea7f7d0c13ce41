// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use fabstir_search_node::{
    api::{start_server, AppState},
    cache::BoundedCache,
    config::NodeConfig,
    content::FullTextExtractor,
    feedback::FeedbackStore,
    history::{HistoryStore, InMemoryHistoryStore},
    model::{Classifier, HfInferenceClient, Summarizer},
    search::{DuckDuckGoScraper, SearchService},
};
use std::{env, sync::Arc};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let config = NodeConfig::from_env();
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    // One model client serves both trait seams
    let model_client = Arc::new(HfInferenceClient::new(config.model.clone()));
    let summarizer: Arc<dyn Summarizer> = model_client.clone();
    let classifier: Arc<dyn Classifier> = model_client;

    let cache = Arc::new(BoundedCache::new(config.cache_size));
    let history: Arc<dyn HistoryStore> = Arc::new(InMemoryHistoryStore::new());

    let search = Arc::new(SearchService::new(
        Box::new(DuckDuckGoScraper::new()),
        cache,
        summarizer,
        classifier,
        history.clone(),
        FullTextExtractor::new(),
    ));

    let state = AppState {
        search,
        feedback: Arc::new(FeedbackStore::new()),
        history,
    };

    start_server(state, &config.listen_addr).await
}
