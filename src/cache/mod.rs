//! Cache Module
//!
//! In-memory memoization of upstream API responses with TTL expiration.

mod entry;
mod stats;
mod store;


use serde::Serialize;

// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use stats::CacheStats;
pub use store::FetchCache;

// == Public Constants ==
/// Default response lifetime in seconds
pub const DEFAULT_TTL_SECS: u64 = 5 * 60;

// == Request Key ==
/// Builds the cache signature for a request: `"{url}_{options as JSON}"`.
///
/// Options that fail to serialize contribute an empty suffix.
pub fn request_key<O: Serialize>(url: &str, options: &O) -> String {
    let options = serde_json::to_string(options).unwrap_or_default();
    format!("{}_{}", url, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_request_key_includes_options() {
        let mut headers = BTreeMap::new();
        headers.insert("Accept-Language", "es-CL");

        let plain = request_key("/propiedads", &BTreeMap::<String, String>::new());
        let with_headers = request_key("/propiedads", &headers);

        assert_eq!(plain, "/propiedads_{}");
        assert_eq!(with_headers, r#"/propiedads_{"Accept-Language":"es-CL"}"#);
        assert_ne!(plain, with_headers);
    }
}
