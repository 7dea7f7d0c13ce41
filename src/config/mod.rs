// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Node configuration loaded from environment variables

use std::env;

use crate::cache::CACHE_SIZE;

/// Configuration for the search node
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Address the HTTP API listens on
    pub listen_addr: String,
    /// Capacity of the shared result/summary cache
    pub cache_size: usize,
    /// Model endpoint configuration
    pub model: ModelConfig,
}

/// Configuration for the remote inference endpoint
#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Base URL of the inference endpoint
    pub endpoint: String,
    /// Model id used for summarization
    pub summarization_model: String,
    /// Model id used for zero-shot classification
    pub classification_model: String,
    /// Optional bearer token for the endpoint
    pub api_token: Option<String>,
}

impl NodeConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            listen_addr: env::var("LISTEN_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
            cache_size: env::var("CACHE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(CACHE_SIZE),
            model: ModelConfig::from_env(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.cache_size == 0 {
            return Err("Cache size must be greater than 0".to_string());
        }
        if self.model.endpoint.is_empty() {
            return Err("Model endpoint must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            cache_size: CACHE_SIZE,
            model: ModelConfig::default(),
        }
    }
}

impl ModelConfig {
    /// Load model configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            endpoint: env::var("MODEL_API_URL")
                .unwrap_or_else(|_| "https://api-inference.huggingface.co".to_string()),
            summarization_model: env::var("SUMMARIZATION_MODEL")
                .unwrap_or_else(|_| "sshleifer/distilbart-cnn-12-6".to_string()),
            classification_model: env::var("CLASSIFICATION_MODEL")
                .unwrap_or_else(|_| "valhalla/distilbart-mnli-12-1".to_string()),
            api_token: env::var("MODEL_API_TOKEN").ok(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api-inference.huggingface.co".to_string(),
            summarization_model: "sshleifer/distilbart-cnn-12-6".to_string(),
            classification_model: "valhalla/distilbart-mnli-12-1".to_string(),
            api_token: None,
        }
    }
}
