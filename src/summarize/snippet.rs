// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Snippet summarization with per-snippet length policy

use std::sync::Arc;
use tracing::warn;

use super::{MIN_SUMMARIZABLE_WORDS, SUMMARY_MIN_LENGTH};
use crate::model::Summarizer;
use crate::text::{clean_text, word_count};

const SNIPPET_MAX_LENGTH_FLOOR: usize = 25;
const SNIPPET_MAX_LENGTH_CEIL: usize = 60;

/// Summarizes short snippet blocks, one summary per input in input order
pub struct SnippetSummarizer {
    summarizer: Arc<dyn Summarizer>,
}

impl SnippetSummarizer {
    /// Create a snippet summarizer over a model seam
    pub fn new(summarizer: Arc<dyn Summarizer>) -> Self {
        Self { summarizer }
    }

    /// Summarize each snippet, preserving order.
    ///
    /// A snippet is cleaned first. Under [`MIN_SUMMARIZABLE_WORDS`] words it
    /// is too short to usefully compress and the cleaned text stands in as
    /// its own summary, without a model call. Model failures fall back to
    /// the cleaned text as well.
    pub async fn summarize_many(&self, snippets: &[String]) -> Vec<String> {
        let mut summaries = Vec::with_capacity(snippets.len());

        for text in snippets {
            let cleaned = clean_text(text);
            let words = word_count(&cleaned);

            if words < MIN_SUMMARIZABLE_WORDS {
                summaries.push(cleaned);
                continue;
            }

            let max_length =
                (words - 1).clamp(SNIPPET_MAX_LENGTH_FLOOR, SNIPPET_MAX_LENGTH_CEIL);

            match self
                .summarizer
                .summarize(&cleaned, SUMMARY_MIN_LENGTH, max_length)
                .await
            {
                Ok(summary) => summaries.push(summary),
                Err(e) => {
                    warn!("Summarization error: {}", e);
                    summaries.push(cleaned);
                }
            }
        }

        summaries
    }
}
