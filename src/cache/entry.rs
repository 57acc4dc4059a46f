//! Cache Entry Module
//!
//! A memoized API response plus the moment it was stored.

use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

// == Cache Entry ==
/// A single memoized response.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The decoded response body
    pub value: Value,
    /// Storage timestamp (Unix milliseconds)
    pub stored_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry stamped with the current time.
    pub fn new(value: Value) -> Self {
        Self::stored_at(value, current_timestamp_ms())
    }

    /// Creates an entry stamped with an explicit time.
    pub fn stored_at(value: Value, stored_at: u64) -> Self {
        Self { value, stored_at }
    }

    // == Age ==
    /// Milliseconds elapsed since the entry was stored.
    pub fn age_ms(&self, now: u64) -> u64 {
        now.saturating_sub(self.stored_at)
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived `ttl_ms` at time `now`.
    ///
    /// The entry stays valid while its age is strictly below the TTL; once the
    /// full TTL has elapsed it is expired.
    pub fn is_expired_at(&self, now: u64, ttl_ms: u64) -> bool {
        self.age_ms(now) >= ttl_ms
    }

    /// Remaining validity in milliseconds at time `now` (0 once expired).
    pub fn ttl_remaining_ms(&self, now: u64, ttl_ms: u64) -> u64 {
        ttl_ms.saturating_sub(self.age_ms(now))
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
