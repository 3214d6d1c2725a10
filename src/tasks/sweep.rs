//! Expired Entry Sweep Task
//!
//! Background task that periodically purges expired cache entries so memory
//! stays bounded even for keys that are never read again.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Shortest pause between sweeps; each sweep takes the store's write lock.
pub const MIN_SWEEP_INTERVAL_SECS: u64 = 1;

/// Spawns a background task that periodically purges expired cache entries.
///
/// The task sleeps for `sweep_interval_secs` between sweeps (at least
/// `MIN_SWEEP_INTERVAL_SECS`) and exits as soon as `cancel` is triggered.
/// Reads and writes on the store are never blocked for longer than one purge
/// pass.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(CacheStore::with_system_clock(300)?);
/// let cancel = CancellationToken::new();
/// let handle = spawn_sweep_task(cache.clone(), 60, cancel.clone());
/// // Later, during shutdown:
/// cancel.cancel();
/// handle.await?;
/// ```
pub fn spawn_sweep_task<V>(
    cache: Arc<CacheStore<V>>,
    sweep_interval_secs: u64,
    cancel: CancellationToken,
) -> JoinHandle<()>
where
    V: Clone + Send + Sync + 'static,
{
    let interval = sweep_interval(sweep_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting expired entry sweep with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    info!("Expired entry sweep cancelled");
                    break;
                }
                _ = tokio::time::sleep(interval) => {}
            }

            let removed = cache.purge_expired();

            if removed > 0 {
                info!(removed, remaining = cache.len(), "Sweep removed expired entries");
            } else {
                debug!("Sweep found no expired entries");
            }
        }
    })
}

fn sweep_interval(secs: u64) -> Duration {
    Duration::from_secs(secs.max(MIN_SWEEP_INTERVAL_SECS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;

    fn test_cache() -> (Arc<CacheStore<String>>, ManualClock) {
        let clock = ManualClock::new(1_700_000_000_000);
        let cache = Arc::new(CacheStore::new(300, Arc::new(clock.clone())));
        (cache, clock)
    }

    #[tokio::test]
    async fn test_sweep_removes_expired_entries() {
        let (cache, clock) = test_cache();

        cache
            .set("expire_soon", "value".to_string(), Some(1))
            .unwrap();
        clock.advance(Duration::from_secs(2));

        let cancel = CancellationToken::new();
        let handle = spawn_sweep_task(cache.clone(), 1, cancel.clone());

        tokio::time::sleep(Duration::from_millis(1500)).await;

        // Removed without any read touching it
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.stats().evictions, 1);
        assert_eq!(cache.stats().misses, 0);

        cancel.cancel();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_sweep_preserves_valid_entries() {
        let (cache, _) = test_cache();

        cache
            .set("long_lived", "value".to_string(), Some(3600))
            .unwrap();

        let cancel = CancellationToken::new();
        let handle = spawn_sweep_task(cache.clone(), 1, cancel.clone());

        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert_eq!(cache.get("long_lived").as_deref(), Some("value"));

        cancel.cancel();
        handle.await.unwrap();
    }

    #[test]
    fn test_sweep_interval_never_below_minimum() {
        assert_eq!(sweep_interval(0), Duration::from_secs(MIN_SWEEP_INTERVAL_SECS));
        assert_eq!(sweep_interval(30), Duration::from_secs(30));
    }

    #[tokio::test]
    async fn test_zero_interval_sweeps_once_per_second() {
        let (cache, clock) = test_cache();

        cache.set("expire_soon", "value".to_string(), Some(1)).unwrap();
        clock.advance(Duration::from_secs(2));

        let cancel = CancellationToken::new();
        let handle = spawn_sweep_task(cache.clone(), 0, cancel.clone());

        // Still waiting out the clamped interval, not spinning
        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(cache.len(), 1);

        tokio::time::sleep(Duration::from_millis(1200)).await;
        assert_eq!(cache.len(), 0);

        cancel.cancel();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_sweep_stops_on_cancel() {
        let (cache, _) = test_cache();
        let cancel = CancellationToken::new();

        let handle = spawn_sweep_task(cache, 3600, cancel.clone());
        cancel.cancel();

        let joined = tokio::time::timeout(Duration::from_secs(1), handle).await;
        assert!(joined.is_ok(), "Task should exit promptly after cancel");
    }
}
