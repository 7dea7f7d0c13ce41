// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! GET /summary - full-page summary for a result link

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::errors::{reject, ErrorResponse};
use super::http_server::AppState;

/// Query parameters for GET /summary
#[derive(Debug, Deserialize)]
pub struct SummaryParams {
    /// Result link, possibly still redirect-wrapped (required)
    pub url: Option<String>,
}

/// Response body for GET /summary
#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// The page summary, or the unavailability placeholder
    pub summary: String,
}

/// Handle GET /summary
///
/// Always 200 once the `url` parameter is present: extraction failure is
/// reported inside the body as a placeholder summary, not as an HTTP error.
///
/// # Errors
/// - 400 when `url` is missing
pub async fn summary_handler(
    State(state): State<AppState>,
    Query(params): Query<SummaryParams>,
) -> Result<Json<SummaryResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Some(url) = params.url else {
        return Err(reject(StatusCode::BAD_REQUEST, "Missing url parameter"));
    };

    debug!("Summary request: {}", url);

    let summary = state.search.full_summary(&url).await;
    Ok(Json(SummaryResponse { summary }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_serialization() {
        let body = SummaryResponse {
            summary: "a summary".to_string(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"summary":"a summary"}"#);
    }
}
