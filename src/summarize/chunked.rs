// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Chunked map-then-reduce summarization for full articles
//!
//! Long text is split into word chunks that fit the model's input budget,
//! each chunk summarized on its own, then a second pass summarizes the
//! joined chunk summaries. Every model invocation stays within the input
//! budget this way.

use std::sync::Arc;
use tracing::warn;

use super::SUMMARY_MIN_LENGTH;
use crate::model::Summarizer;
use crate::text::word_count;

/// Input budget per model invocation, in words
pub const MAX_INPUT_TOKENS: usize = 1024;

/// `max_length` for every full-text summarization call
pub const MAX_SUMMARY_LENGTH: usize = 100;

/// Headroom subtracted from the input budget when chunking
const CHUNK_MARGIN: usize = 50;

/// Two-level summarizer for text exceeding the model input budget
pub struct ChunkedSummarizer {
    summarizer: Arc<dyn Summarizer>,
    max_input_tokens: usize,
    max_summary_length: usize,
}

impl ChunkedSummarizer {
    /// Create a chunked summarizer with the default budgets
    pub fn new(summarizer: Arc<dyn Summarizer>) -> Self {
        Self::with_limits(summarizer, MAX_INPUT_TOKENS, MAX_SUMMARY_LENGTH)
    }

    /// Create a chunked summarizer with explicit budgets
    pub fn with_limits(
        summarizer: Arc<dyn Summarizer>,
        max_input_tokens: usize,
        max_summary_length: usize,
    ) -> Self {
        Self {
            summarizer,
            max_input_tokens,
            max_summary_length,
        }
    }

    /// Summarize `text`, chunking when it exceeds the input budget.
    ///
    /// Fits in one call → one invocation. Otherwise each chunk is
    /// summarized independently (a failed chunk keeps its raw text), and
    /// when two or more chunk summaries exist a reduce pass summarizes
    /// their concatenation, falling back to the concatenation itself.
    pub async fn summarize(&self, text: &str) -> String {
        if word_count(text) <= self.max_input_tokens {
            return match self
                .summarizer
                .summarize(text, SUMMARY_MIN_LENGTH, self.max_summary_length)
                .await
            {
                Ok(summary) => summary,
                Err(e) => {
                    warn!("Summarization error: {}", e);
                    text.to_string()
                }
            };
        }

        let words: Vec<&str> = text.split_whitespace().collect();
        // A budget at or under the margin still needs a non-zero chunk size
        let chunk_size = self.max_input_tokens.saturating_sub(CHUNK_MARGIN).max(1);

        let mut chunk_summaries = Vec::new();
        for chunk in words.chunks(chunk_size) {
            let chunk_text = chunk.join(" ");
            match self
                .summarizer
                .summarize(&chunk_text, SUMMARY_MIN_LENGTH, self.max_summary_length)
                .await
            {
                Ok(summary) => chunk_summaries.push(summary),
                Err(e) => {
                    warn!("Chunk summarization error: {}", e);
                    chunk_summaries.push(chunk_text);
                }
            }
        }

        if chunk_summaries.len() == 1 {
            return chunk_summaries.remove(0);
        }

        let joined = chunk_summaries.join(" ");
        match self
            .summarizer
            .summarize(&joined, SUMMARY_MIN_LENGTH, self.max_summary_length)
            .await
        {
            Ok(summary) => summary,
            Err(e) => {
                warn!("Final chunk summarization error: {}", e);
                joined
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct RecordingSummarizer {
        calls: AtomicUsize,
        inputs: Mutex<Vec<String>>,
        fail: bool,
    }

    impl RecordingSummarizer {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                inputs: Mutex::new(Vec::new()),
                fail,
            }
        }
    }

    #[async_trait]
    impl Summarizer for RecordingSummarizer {
        async fn summarize(
            &self,
            text: &str,
            _min_length: usize,
            _max_length: usize,
        ) -> Result<String, ModelError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inputs.lock().unwrap().push(text.to_string());
            if self.fail {
                return Err(ModelError::Http("connection refused".to_string()));
            }
            Ok(format!("S{}", self.calls.load(Ordering::SeqCst)))
        }
    }

    fn words(n: usize) -> String {
        (0..n).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ")
    }

    #[tokio::test]
    async fn test_short_input_is_one_invocation() {
        let model = Arc::new(RecordingSummarizer::new(false));
        let chunked = ChunkedSummarizer::new(model.clone());

        let out = chunked.summarize(&words(MAX_INPUT_TOKENS)).await;

        assert_eq!(out, "S1");
        assert_eq!(model.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_long_input_maps_chunks_then_reduces() {
        let model = Arc::new(RecordingSummarizer::new(false));
        let chunked = ChunkedSummarizer::new(model.clone());

        // 2000 words → chunks of 974 → 3 chunk calls + 1 reduce call
        chunked.summarize(&words(2000)).await;

        assert_eq!(model.calls.load(Ordering::SeqCst), 4);
        let inputs = model.inputs.lock().unwrap();
        assert_eq!(word_count(&inputs[0]), MAX_INPUT_TOKENS - CHUNK_MARGIN);
        // Reduce pass sees the joined chunk summaries
        assert_eq!(inputs[3], "S1 S2 S3");
    }

    #[tokio::test]
    async fn test_every_invocation_within_input_budget() {
        let model = Arc::new(RecordingSummarizer::new(false));
        let chunked = ChunkedSummarizer::new(model.clone());

        chunked.summarize(&words(5000)).await;

        let inputs = model.inputs.lock().unwrap();
        for input in inputs.iter() {
            assert!(word_count(input) <= MAX_INPUT_TOKENS);
        }
    }

    #[tokio::test]
    async fn test_failed_chunks_keep_raw_text_and_reduce_falls_back() {
        let model = Arc::new(RecordingSummarizer::new(true));
        let chunked = ChunkedSummarizer::new(model);

        let input = words(2000);
        let out = chunked.summarize(&input).await;

        // All chunks failed, so the fallback concatenation is the raw words
        assert_eq!(out, input);
    }

    #[tokio::test]
    async fn test_direct_path_failure_falls_back_to_input() {
        let model = Arc::new(RecordingSummarizer::new(true));
        let chunked = ChunkedSummarizer::new(model);

        let input = words(100);
        assert_eq!(chunked.summarize(&input).await, input);
    }

    #[tokio::test]
    async fn test_tiny_input_budget_does_not_panic() {
        let model = Arc::new(RecordingSummarizer::new(false));
        let chunked = ChunkedSummarizer::with_limits(model.clone(), 10, 40);

        // Budget under the chunk margin degrades to one-word chunks
        let out = chunked.summarize(&words(12)).await;

        assert!(!out.is_empty());
        assert_eq!(model.calls.load(Ordering::SeqCst), 13);
    }

    #[tokio::test]
    async fn test_custom_limits_control_chunking() {
        let model = Arc::new(RecordingSummarizer::new(false));
        let chunked = ChunkedSummarizer::with_limits(model.clone(), 100, 40);

        // 120 words with budget 100 → chunks of 50 → 3 calls total
        chunked.summarize(&words(120)).await;

        assert_eq!(model.calls.load(Ordering::SeqCst), 3);
    }
}
