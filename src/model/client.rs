// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Hugging Face inference endpoint client
//!
//! Speaks the hosted-inference wire format for the summarization and
//! zero-shot classification pipelines, so the node can point at either the
//! public API or a self-hosted text-inference deployment. No client-side
//! timeout is set: inference duration is bounded by the deployment, not by
//! this node.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{Classifier, ModelError, Summarizer};
use crate::config::ModelConfig;

/// Client for a Hugging Face style inference endpoint
pub struct HfInferenceClient {
    client: Client,
    endpoint: String,
    summarization_model: String,
    classification_model: String,
    api_token: Option<String>,
}

#[derive(Serialize)]
struct SummarizationRequest<'a> {
    inputs: &'a str,
    parameters: SummarizationParameters,
}

#[derive(Serialize)]
struct SummarizationParameters {
    min_length: usize,
    max_length: usize,
}

#[derive(Deserialize)]
struct SummarizationOutput {
    summary_text: String,
}

#[derive(Serialize)]
struct ClassificationRequest<'a> {
    inputs: &'a str,
    parameters: ClassificationParameters<'a>,
}

#[derive(Serialize)]
struct ClassificationParameters<'a> {
    candidate_labels: Vec<&'a str>,
}

#[derive(Deserialize)]
struct ClassificationOutput {
    labels: Vec<String>,
}

impl HfInferenceClient {
    /// Create a client from model configuration
    pub fn new(config: ModelConfig) -> Self {
        let client = Client::builder()
            .user_agent("fabstir-search-node/0.1")
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint: config.endpoint,
            summarization_model: config.summarization_model,
            classification_model: config.classification_model,
            api_token: config.api_token,
        }
    }

    async fn post_model<Req: Serialize>(
        &self,
        model: &str,
        body: &Req,
    ) -> Result<reqwest::Response, ModelError> {
        let url = format!("{}/models/{}", self.endpoint.trim_end_matches('/'), model);

        let mut request = self.client.post(&url).json(body);
        if let Some(ref token) = self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ModelError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ModelError::Endpoint {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl Summarizer for HfInferenceClient {
    async fn summarize(
        &self,
        text: &str,
        min_length: usize,
        max_length: usize,
    ) -> Result<String, ModelError> {
        let body = SummarizationRequest {
            inputs: text,
            parameters: SummarizationParameters {
                min_length,
                max_length,
            },
        };

        let response = self.post_model(&self.summarization_model, &body).await?;

        // The summarization pipeline answers with a one-element array
        let outputs: Vec<SummarizationOutput> = response
            .json()
            .await
            .map_err(|e| ModelError::Malformed(e.to_string()))?;

        outputs
            .into_iter()
            .next()
            .map(|o| o.summary_text)
            .ok_or_else(|| ModelError::Malformed("empty summarization output".to_string()))
    }
}

#[async_trait]
impl Classifier for HfInferenceClient {
    async fn classify(&self, text: &str, labels: &[&str]) -> Result<Vec<String>, ModelError> {
        let body = ClassificationRequest {
            inputs: text,
            parameters: ClassificationParameters {
                candidate_labels: labels.to_vec(),
            },
        };

        let response = self.post_model(&self.classification_model, &body).await?;

        let output: ClassificationOutput = response
            .json()
            .await
            .map_err(|e| ModelError::Malformed(e.to_string()))?;

        if output.labels.is_empty() {
            return Err(ModelError::Malformed(
                "classification returned no labels".to_string(),
            ));
        }

        Ok(output.labels)
    }
}
