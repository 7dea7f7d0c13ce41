// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Summarization stages built on the [`crate::model::Summarizer`] seam
//!
//! Both stages are soft-failing: a model error is logged and replaced with
//! the uncompressed input, never propagated to the request.

pub mod chunked;
pub mod snippet;

pub use chunked::{ChunkedSummarizer, MAX_INPUT_TOKENS, MAX_SUMMARY_LENGTH};
pub use snippet::SnippetSummarizer;

/// Word count below which text is returned as its own summary
pub const MIN_SUMMARIZABLE_WORDS: usize = 20;

/// `min_length` passed to every summarization call
pub const SUMMARY_MIN_LENGTH: usize = 20;
