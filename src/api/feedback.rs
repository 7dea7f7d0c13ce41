// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! POST /feedback and GET /feedback

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::errors::{reject, ErrorResponse};
use super::http_server::AppState;
use crate::feedback::FeedbackRecord;

/// Request body for POST /feedback
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRequest {
    /// Result URL the feedback is about (required)
    pub url: Option<String>,
    /// Suggested category
    pub category: Option<String>,
    /// Free-form feedback on the summary
    pub summary_feedback: Option<String>,
}

/// Acknowledgement body for POST /feedback
#[derive(Debug, Serialize, Deserialize)]
pub struct FeedbackAck {
    /// Always true on success
    pub ok: bool,
}

/// Handle POST /feedback
///
/// # Errors
/// - 400 when `url` is missing
pub async fn submit_feedback_handler(
    State(state): State<AppState>,
    Json(request): Json<FeedbackRequest>,
) -> Result<Json<FeedbackAck>, (StatusCode, Json<ErrorResponse>)> {
    let Some(url) = request.url else {
        return Err(reject(StatusCode::BAD_REQUEST, "Missing url in feedback"));
    };

    state.feedback.record(
        &url,
        FeedbackRecord {
            category: request.category,
            summary_feedback: request.summary_feedback,
        },
    );

    Ok(Json(FeedbackAck { ok: true }))
}

/// Handle GET /feedback: snapshot of everything recorded so far
pub async fn get_feedback_handler(
    State(state): State<AppState>,
) -> Json<HashMap<String, Vec<FeedbackRecord>>> {
    Json(state.feedback.all())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserialization() {
        let json = r#"{
            "url": "https://example.com",
            "category": "Technology",
            "summary_feedback": "too terse"
        }"#;

        let request: FeedbackRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.url.as_deref(), Some("https://example.com"));
        assert_eq!(request.category.as_deref(), Some("Technology"));
    }

    #[test]
    fn test_request_with_only_url() {
        let request: FeedbackRequest =
            serde_json::from_str(r#"{"url": "https://example.com"}"#).unwrap();
        assert!(request.category.is_none());
        assert!(request.summary_feedback.is_none());
    }
}
