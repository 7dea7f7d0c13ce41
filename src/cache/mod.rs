// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Bounded FIFO cache shared by result pages and full-page summaries

use std::collections::HashMap;
use std::sync::RwLock;

use crate::search::types::SearchResult;

/// Default capacity for the node-wide cache
pub const CACHE_SIZE: usize = 20;

/// A cached value: either one window of search results or one page summary
#[derive(Debug, Clone)]
pub enum CachedPayload {
    /// A `{query}:{start}:{limit}` result window
    Results(Vec<SearchResult>),
    /// A `full_summary:{url}` page summary
    Summary(String),
}

struct CacheSlot {
    payload: CachedPayload,
    seq: u64,
}

struct CacheInner {
    entries: HashMap<String, CacheSlot>,
    next_seq: u64,
}

/// Fixed-capacity cache with strict insertion-order eviction.
///
/// Unlike an LRU, a `get` never refreshes an entry: when the cache is full
/// the entry inserted earliest is the one evicted, regardless of how often
/// it has been read. Keys are opaque strings; callers namespace them.
pub struct BoundedCache {
    inner: RwLock<CacheInner>,
    capacity: usize,
}

/// Cache statistics
#[derive(Debug, Clone)]
pub struct CacheStats {
    /// Total entries in cache
    pub total: usize,
    /// Maximum cache capacity
    pub max: usize,
}

impl BoundedCache {
    /// Create a cache holding at most `capacity` entries
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: RwLock::new(CacheInner {
                entries: HashMap::new(),
                next_seq: 0,
            }),
            capacity,
        }
    }

    /// Look up a key. Does not affect eviction order.
    pub fn get(&self, key: &str) -> Option<CachedPayload> {
        let inner = self.inner.read().ok()?;
        inner.entries.get(key).map(|slot| slot.payload.clone())
    }

    /// Insert a value, evicting the single earliest-inserted entry first
    /// when the cache is at capacity.
    pub fn insert(&self, key: String, payload: CachedPayload) {
        let mut inner = match self.inner.write() {
            Ok(i) => i,
            Err(_) => return,
        };

        // Replacing an existing key never needs an eviction
        if !inner.entries.contains_key(&key) && inner.entries.len() >= self.capacity {
            Self::evict_oldest(&mut inner.entries);
        }

        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.entries.insert(key, CacheSlot { payload, seq });
    }

    /// Clear all cache entries
    pub fn clear(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.entries.clear();
        }
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        let total = self
            .inner
            .read()
            .map(|inner| inner.entries.len())
            .unwrap_or(0);
        CacheStats {
            total,
            max: self.capacity,
        }
    }

    fn evict_oldest(entries: &mut HashMap<String, CacheSlot>) {
        if let Some(oldest_key) = entries
            .iter()
            .min_by_key(|(_, slot)| slot.seq)
            .map(|(k, _)| k.clone())
        {
            entries.remove(&oldest_key);
        }
    }
}

impl Default for BoundedCache {
    fn default() -> Self {
        Self::new(CACHE_SIZE)
    }
}
