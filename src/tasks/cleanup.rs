//! Cache Sweep Task
//!
//! Background task that periodically drops expired fetch-cache entries so
//! responses nobody asks for again do not linger until shutdown.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::FetchCache;

/// Spawns a background task that sweeps expired responses from the cache.
///
/// Lookups already treat stale entries as misses; the sweep only bounds
/// memory. The write lock is held for the sweep alone.
///
/// # Arguments
/// * `cache` - Cache shared with the fetcher
/// * `cleanup_interval_secs` - Seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, aborted during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(RwLock::new(FetchCache::new(Duration::from_secs(300))));
/// let cleanup_handle = spawn_cleanup_task(cache.clone(), 60);
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task(
    cache: Arc<RwLock<FetchCache>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting cache sweep task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.cleanup_expired()
            };

            if removed > 0 {
                info!("Cache sweep: removed {} expired responses", removed);
            } else {
                debug!("Cache sweep: no expired responses found");
            }
        }
    })
}
