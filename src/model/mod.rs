// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Model-call boundary: narrow trait seams over remote inference
//!
//! The pipeline treats summarization and zero-shot classification as opaque
//! functions. These traits are the only surface the pipeline sees; the
//! concrete client lives in [`client`] and the composition is fixed at
//! startup. Every caller decides its own fallback when a call fails, so a
//! model error is never fatal to a request.

pub mod client;

use async_trait::async_trait;
use thiserror::Error;

pub use client::HfInferenceClient;

/// Errors from a remote model invocation
#[derive(Debug, Error)]
pub enum ModelError {
    /// The endpoint answered with a non-success status
    #[error("model endpoint error: {status} - {message}")]
    Endpoint {
        /// HTTP status code
        status: u16,
        /// Response body or status text
        message: String,
    },

    /// The request never completed
    #[error("model request failed: {0}")]
    Http(String),

    /// The endpoint answered but the payload was not the expected shape
    #[error("unexpected model response: {0}")]
    Malformed(String),
}

/// Abstractive text summarization with a length window
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize `text` into roughly `min_length..=max_length` tokens
    async fn summarize(
        &self,
        text: &str,
        min_length: usize,
        max_length: usize,
    ) -> Result<String, ModelError>;
}

/// Zero-shot classification against a caller-supplied label set
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Rank `labels` by how well they describe `text`, best first
    async fn classify(&self, text: &str, labels: &[&str]) -> Result<Vec<String>, ModelError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_error_display() {
        let error = ModelError::Endpoint {
            status: 503,
            message: "loading".to_string(),
        };
        assert!(error.to_string().contains("503"));

        let error = ModelError::Malformed("empty array".to_string());
        assert!(error.to_string().contains("empty array"));
    }
}
