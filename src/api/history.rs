// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! GET /history

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::http_server::AppState;
use crate::history::DEFAULT_USER;

/// Response body for GET /history
#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryResponse {
    /// The implicit user's recent queries, oldest first
    pub history: Vec<String>,
}

/// Handle GET /history
pub async fn history_handler(State(state): State<AppState>) -> Json<HistoryResponse> {
    Json(HistoryResponse {
        history: state.history.get(DEFAULT_USER).await,
    })
}
