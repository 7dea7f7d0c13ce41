// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Result categorization: keyword short-circuit with zero-shot fallback
//!
//! The candidate label set depends on what the user seems to be doing
//! (learning, following news, shopping), but four keyword groups are checked
//! first regardless of label set; a hit there answers immediately without a
//! model call.

use std::sync::Arc;
use tracing::warn;

use crate::model::Classifier;

/// Category assigned when the classifier fails
pub const UNCATEGORIZED: &str = "Uncategorized";

const LEARNING_INTENT: &[&str] = &["learn", "tutorial", "course"];
const NEWS_INTENT: &[&str] = &["news", "update", "latest"];
const SHOPPING_INTENT: &[&str] = &["shopping", "buy", "price"];

const LEARNING_LABELS: &[&str] = &["Early Learner", "Intermediate", "Advanced"];
const NEWS_LABELS: &[&str] = &[
    "Politics",
    "Sports",
    "Technology",
    "Health",
    "Business",
    "Entertainment",
    "Economy",
];
const SHOPPING_LABELS: &[&str] = &["Electronics", "Fashion", "Home", "Books", "Toys"];
const DEFAULT_LABELS: &[&str] = &["General", "Other"];

// Checked in this order; first group with a hit wins
const KEYWORD_GROUPS: &[(&[&str], &str)] = &[
    (
        &[
            "match",
            "tournament",
            "goal",
            "score",
            "team",
            "player",
            "league",
            "cricket",
            "football",
            "soccer",
        ],
        "Sports",
    ),
    (
        &[
            "technology",
            "tech",
            "software",
            "hardware",
            "smartphone",
            "computer",
        ],
        "Technology",
    ),
    (
        &[
            "government",
            "election",
            "policy",
            "minister",
            "president",
            "parliament",
        ],
        "Politics",
    ),
    (
        &[
            "health",
            "medical",
            "doctor",
            "hospital",
            "covid",
            "vaccine",
            "medicine",
        ],
        "Health",
    ),
];

/// Assigns a topical category to snippet text
pub struct Categorizer {
    classifier: Arc<dyn Classifier>,
}

impl Categorizer {
    /// Create a categorizer over a zero-shot classifier seam
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }

    /// Categorize `text` in the context of the query that produced it.
    ///
    /// The keyword groups are tried first and bypass the model entirely.
    /// Otherwise the zero-shot classifier ranks the intent-selected label
    /// set; its top label is the category, or [`UNCATEGORIZED`] when the
    /// model call fails.
    pub async fn categorize(&self, text: &str, query: &str) -> String {
        let text_lc = text.to_lowercase();

        for (keywords, category) in KEYWORD_GROUPS {
            if keywords.iter().any(|kw| text_lc.contains(kw)) {
                return (*category).to_string();
            }
        }

        let labels = label_set(query);
        match self.classifier.classify(text, labels).await {
            Ok(ranked) => ranked
                .into_iter()
                .next()
                .unwrap_or_else(|| UNCATEGORIZED.to_string()),
            Err(e) => {
                warn!("Category classification error: {}", e);
                UNCATEGORIZED.to_string()
            }
        }
    }
}

/// Pick the candidate label set from the query's apparent intent.
///
/// Substring containment on the lowercased query, in priority order:
/// learning, news, shopping, then the two-way default.
fn label_set(query: &str) -> &'static [&'static str] {
    let query = query.to_lowercase();

    if LEARNING_INTENT.iter().any(|kw| query.contains(kw)) {
        LEARNING_LABELS
    } else if NEWS_INTENT.iter().any(|kw| query.contains(kw)) {
        NEWS_LABELS
    } else if SHOPPING_INTENT.iter().any(|kw| query.contains(kw)) {
        SHOPPING_LABELS
    } else {
        DEFAULT_LABELS
    }
}
