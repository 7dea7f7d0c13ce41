// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! GET /search - scrape, summarize and categorize a result window

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::errors::{reject, ErrorResponse};
use super::http_server::AppState;
use crate::search::{SearchResult, DEFAULT_LIMIT, MAX_LIMIT};

/// Query parameters for GET /search
///
/// `start` and `limit` arrive as raw strings so that unparsable values
/// degrade to the defaults instead of rejecting the request.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Search query (required)
    pub q: Option<String>,
    /// Window offset, default 0
    pub start: Option<String>,
    /// Window size, default 20, clamped to [1, 80]
    pub limit: Option<String>,
}

/// Response body for GET /search
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    /// The selected result window
    pub results: Vec<SearchResult>,
}

/// Handle GET /search
///
/// # Errors
/// - 400 when `q` is missing
/// - 500 when the scrape fails
pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Some(query) = params.q else {
        return Err(reject(
            StatusCode::BAD_REQUEST,
            "Missing search query parameter q",
        ));
    };

    let start = params
        .start
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(0)
        .max(0) as usize;
    let limit = params
        .limit
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(DEFAULT_LIMIT as i64)
        .clamp(1, MAX_LIMIT as i64) as usize;

    debug!("Search request: '{}' [{}..+{}]", query, start, limit);

    match state.search.search(&query, start, limit).await {
        Ok(results) => Ok(Json(SearchResponse { results })),
        Err(e) => {
            warn!("Search error: {}", e);
            Err(reject(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_deserialize_with_missing_fields() {
        let params: SearchParams = serde_json::from_str(r#"{"q":"rust"}"#).unwrap();
        assert_eq!(params.q.as_deref(), Some("rust"));
        assert!(params.start.is_none());
        assert!(params.limit.is_none());
    }

    #[test]
    fn test_response_serialization() {
        let body = SearchResponse { results: vec![] };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"results":[]}"#);
    }
}
