// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search history collaborator interface

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

/// Most recent queries kept per user
pub const HISTORY_LIMIT: usize = 20;

/// The single implicit user of this deployment
pub const DEFAULT_USER: &str = "default_user";

/// Append-log interface to the history store
///
/// The store itself is an external collaborator; the pipeline only appends
/// queries and reads them back. Async because a real backing store is a
/// network hop away.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Append a query to the user's history, keeping the most recent
    /// [`HISTORY_LIMIT`] entries
    async fn save(&self, user_id: &str, query: &str);

    /// The user's recorded queries, oldest first
    async fn get(&self, user_id: &str) -> Vec<String>;
}

/// Process-lifetime in-memory history store
pub struct InMemoryHistoryStore {
    entries: RwLock<HashMap<String, Vec<String>>>,
}

impl InMemoryHistoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryHistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistoryStore for InMemoryHistoryStore {
    async fn save(&self, user_id: &str, query: &str) {
        let mut entries = match self.entries.write() {
            Ok(e) => e,
            Err(_) => return,
        };

        let queries = entries.entry(user_id.to_string()).or_default();
        queries.push(query.to_string());

        let excess = queries.len().saturating_sub(HISTORY_LIMIT);
        if excess > 0 {
            queries.drain(..excess);
        }
    }

    async fn get(&self, user_id: &str) -> Vec<String> {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.get(user_id).cloned())
            .unwrap_or_default()
    }
}
