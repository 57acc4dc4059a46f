//! Fetch Cache Module
//!
//! Memoizes upstream responses by request signature with a fixed TTL.
//! Expired entries are dropped lazily on read, or by the background sweep.

use std::collections::HashMap;
use std::time::Duration;

use serde_json::Value;

use crate::cache::entry::current_timestamp_ms;
use crate::cache::{CacheEntry, CacheStats};

// == Fetch Cache ==
/// Response cache keyed by request signature.
#[derive(Debug)]
pub struct FetchCache {
    /// Signature -> memoized response
    entries: HashMap<String, CacheEntry>,
    /// Validity window in milliseconds
    ttl_ms: u64,
    /// Performance statistics
    stats: CacheStats,
}

impl FetchCache {
    // == Constructor ==
    /// Creates an empty cache whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl_ms: ttl.as_millis() as u64,
            stats: CacheStats::new(),
        }
    }

    /// The configured validity window.
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }

    // == Put ==
    /// Stores a response, replacing whatever was under `key`.
    pub fn put(&mut self, key: impl Into<String>, value: Value) {
        self.put_at(key, value, current_timestamp_ms());
    }

    /// Stores a response stamped with an explicit time.
    pub fn put_at(&mut self, key: impl Into<String>, value: Value, now: u64) {
        self.entries
            .insert(key.into(), CacheEntry::stored_at(value, now));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns the memoized response for `key`, or `None` on a miss.
    pub fn get(&mut self, key: &str) -> Option<Value> {
        self.get_at(key, current_timestamp_ms())
    }

    /// Lookup evaluated at an explicit time.
    ///
    /// An expired entry is removed and reported as a miss.
    pub fn get_at(&mut self, key: &str, now: u64) -> Option<Value> {
        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired_at(now, self.ttl_ms),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if expired {
            self.entries.remove(key);
            self.stats.record_expiration();
            self.stats.record_miss();
            self.stats.set_total_entries(self.entries.len());
            return None;
        }

        self.stats.record_hit();
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Clear ==
    /// Drops every entry. Statistics are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.set_total_entries(0);
    }

    // == API Calls ==
    /// Counts a request that went past the cache to an upstream API.
    pub fn record_api_call(&mut self) {
        self.stats.record_api_call();
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Cleanup Expired ==
    /// Removes all expired entries. Returns the number removed.
    pub fn cleanup_expired(&mut self) -> usize {
        self.cleanup_expired_at(current_timestamp_ms())
    }

    /// Sweep evaluated at an explicit time.
    pub fn cleanup_expired_at(&mut self, now: u64) -> usize {
        let ttl_ms = self.ttl_ms;
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| !entry.is_expired_at(now, ttl_ms));

        let removed = before - self.entries.len();
        for _ in 0..removed {
            self.stats.record_expiration();
        }
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Length ==
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
