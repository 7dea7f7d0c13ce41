// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! POST /tts - echo stub kept for client compatibility
//!
//! Speech synthesis happens client-side; this endpoint only validates the
//! payload and echoes the text back.

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::errors::{reject, ErrorResponse};

/// Request body for POST /tts
#[derive(Debug, Serialize, Deserialize)]
pub struct TtsRequest {
    /// Text to speak (required)
    pub text: Option<String>,
}

/// Response body for POST /tts
#[derive(Debug, Serialize, Deserialize)]
pub struct TtsResponse {
    /// Always true on success
    pub ok: bool,
    /// The text echoed back
    pub text: String,
}

/// Handle POST /tts
///
/// # Errors
/// - 400 when `text` is missing
pub async fn tts_handler(
    Json(request): Json<TtsRequest>,
) -> Result<Json<TtsResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Some(text) = request.text else {
        return Err(reject(StatusCode::BAD_REQUEST, "Missing text for TTS"));
    };

    Ok(Json(TtsResponse { ok: true, text }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_echoes_text() {
        let response = tts_handler(Json(TtsRequest {
            text: Some("hello".to_string()),
        }))
        .await
        .unwrap();
        assert!(response.0.ok);
        assert_eq!(response.0.text, "hello");
    }

    #[tokio::test]
    async fn test_missing_text_rejected() {
        let result = tts_handler(Json(TtsRequest { text: None })).await;
        let (status, _) = result.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
