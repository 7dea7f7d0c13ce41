// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Terse JSON error bodies for the HTTP surface

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

/// Error body: a single `error` field with a descriptive message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl ErrorResponse {
    /// Build an error body
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Shorthand for the `(status, body)` rejection tuple handlers return
pub fn reject(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
    (status, Json(ErrorResponse::new(message)))
}
