//! HTTP server assembly: state, router, listener

use anyhow::Result;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use super::feedback::{get_feedback_handler, submit_feedback_handler};
use super::handlers::health_handler;
use super::history::history_handler;
use super::search::search_handler;
use super::summary::summary_handler;
use super::tts::tts_handler;
use crate::feedback::FeedbackStore;
use crate::history::HistoryStore;
use crate::search::SearchService;

/// Shared state injected into every handler
#[derive(Clone)]
pub struct AppState {
    /// The pipeline orchestrator
    pub search: Arc<SearchService>,
    /// Feedback store, process lifetime
    pub feedback: Arc<FeedbackStore>,
    /// History collaborator (the same instance the orchestrator appends to)
    pub history: Arc<dyn HistoryStore>,
}

/// Build the API router over a state instance
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/search", get(search_handler))
        .route("/summary", get(summary_handler))
        .route(
            "/feedback",
            post(submit_feedback_handler).get(get_feedback_handler),
        )
        .route("/history", get(history_handler))
        .route("/tts", post(tts_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Bind and serve until the process exits
pub async fn start_server(state: AppState, listen_addr: &str) -> Result<()> {
    let app = build_router(state);

    let addr = listen_addr.parse::<SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Search node API listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
