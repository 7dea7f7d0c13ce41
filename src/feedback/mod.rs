// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! User feedback on summaries and categories, keyed by result URL

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;

/// One piece of feedback on a result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRecord {
    /// Category the user suggests
    pub category: Option<String>,
    /// Free-form feedback on the summary
    pub summary_feedback: Option<String>,
}

/// Process-lifetime feedback store. Unbounded; there is no persistence
/// and no eviction.
pub struct FeedbackStore {
    entries: RwLock<HashMap<String, Vec<FeedbackRecord>>>,
}

impl FeedbackStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Append a feedback record for a URL
    pub fn record(&self, url: &str, record: FeedbackRecord) {
        if let Ok(mut entries) = self.entries.write() {
            entries.entry(url.to_string()).or_default().push(record);
        }
    }

    /// Snapshot of all feedback, url → records
    pub fn all(&self) -> HashMap<String, Vec<FeedbackRecord>> {
        self.entries
            .read()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }
}

impl Default for FeedbackStore {
    fn default() -> Self {
        Self::new()
    }
}
