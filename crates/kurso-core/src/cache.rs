//! Time-bounded memoization of an expensive load.
//!
//! [`TtlCache`] holds at most one value together with the instant its load
//! started. While the value is younger than the TTL, [`TtlCache::get_or_load`]
//! hands out the cached `Arc`; after that, the next call runs the loader again
//! and swaps the new value in with a single assignment.
//!
//! There is no invalidation API: staleness is bounded by the TTL alone.
//! Two callers that observe an expired entry at the same moment both run the
//! loader and the later write wins; loaders are expected to be deterministic
//! over the same inputs, so either result is acceptable.
//!
//! # Usage
//!
//! ```rust
//! use std::time::Duration;
//! use kurso_core::TtlCache;
//!
//! # async fn demo() {
//! let cache: TtlCache<Vec<String>> = TtlCache::new(Duration::from_secs(300));
//!
//! let first = cache
//!     .get_or_load(|| async { Ok::<_, std::io::Error>(vec!["module-1".to_string()]) })
//!     .await
//!     .unwrap();
//! let second = cache
//!     .get_or_load(|| async { Ok::<_, std::io::Error>(vec![]) })
//!     .await
//!     .unwrap();
//! assert!(std::sync::Arc::ptr_eq(&first, &second));
//! # }
//! ```

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;

/// A single cached value with a time-to-live.
pub struct TtlCache<T> {
    ttl: Duration,
    slot: RwLock<Option<Entry<T>>>,
}

struct Entry<T> {
    value: Arc<T>,
    loaded_at: Instant,
}

impl<T> TtlCache<T> {
    /// Five minutes, the staleness window content edits are allowed.
    pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

    /// Create an empty cache with the given time-to-live.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: RwLock::new(None),
        }
    }

    /// The configured time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return the cached value if it is still fresh.
    pub async fn peek(&self) -> Option<Arc<T>> {
        let guard = self.slot.read().await;
        guard
            .as_ref()
            .filter(|entry| entry.loaded_at.elapsed() < self.ttl)
            .map(|entry| Arc::clone(&entry.value))
    }

    /// Return the cached value, or run `loader` and cache its result.
    ///
    /// A failed load leaves the previous entry untouched and is returned to
    /// the caller; errors are never cached.
    pub async fn get_or_load<F, Fut, E>(&self, loader: F) -> Result<Arc<T>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(value) = self.peek().await {
            return Ok(value);
        }

        let started = Instant::now();
        let value = Arc::new(loader().await?);

        *self.slot.write().await = Some(Entry {
            value: Arc::clone(&value),
            loaded_at: started,
        });
        log::debug!("Cache refreshed in {:?}", started.elapsed());

        Ok(value)
    }
}

impl<T> Default for TtlCache<T> {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TTL)
    }
}

impl<T> fmt::Debug for TtlCache<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let populated = self.slot.try_read().map(|slot| slot.is_some()).ok();
        f.debug_struct("TtlCache")
            .field("ttl", &self.ttl)
            .field("populated", &populated)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    async fn counting_load(
        cache: &TtlCache<usize>,
        calls: &AtomicUsize,
    ) -> Result<Arc<usize>, String> {
        cache
            .get_or_load(|| async {
                let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                Ok(n)
            })
            .await
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_call_within_ttl_is_cached() {
        let cache = TtlCache::new(Duration::from_secs(300));
        let calls = AtomicUsize::new(0);

        let first = counting_load(&cache, &calls).await.unwrap();
        tokio::time::advance(Duration::from_secs(299)).await;
        let second = counting_load(&cache, &calls).await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_call_after_ttl_reloads() {
        let cache = TtlCache::new(Duration::from_secs(300));
        let calls = AtomicUsize::new(0);

        let first = counting_load(&cache, &calls).await.unwrap();
        tokio::time::advance(Duration::from_secs(300)).await;
        let second = counting_load(&cache, &calls).await.unwrap();

        assert_eq!(*first, 1);
        assert_eq!(*second, 2);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_errors_are_not_cached() {
        let cache: TtlCache<usize> = TtlCache::default();

        let err = cache
            .get_or_load(|| async { Err::<usize, _>("directory missing") })
            .await
            .unwrap_err();
        assert_eq!(err, "directory missing");
        assert!(cache.peek().await.is_none());

        let value = cache
            .get_or_load(|| async { Ok::<_, &str>(7) })
            .await
            .unwrap();
        assert_eq!(*value, 7);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_reload_keeps_nothing_fresh() {
        let cache = TtlCache::new(Duration::from_secs(10));
        cache
            .get_or_load(|| async { Ok::<_, &str>(1usize) })
            .await
            .unwrap();

        tokio::time::advance(Duration::from_secs(11)).await;
        assert!(cache.peek().await.is_none());
        assert!(
            cache
                .get_or_load(|| async { Err::<usize, _>("boom") })
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_zero_ttl_always_reloads() {
        let cache = TtlCache::new(Duration::ZERO);
        let calls = AtomicUsize::new(0);

        counting_load(&cache, &calls).await.unwrap();
        counting_load(&cache, &calls).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_default_ttl_is_five_minutes() {
        let cache: TtlCache<()> = TtlCache::default();
        assert_eq!(cache.ttl(), Duration::from_secs(300));
    }

    #[test]
    fn test_debug_output() {
        let cache: TtlCache<()> = TtlCache::default();
        let debug = format!("{cache:?}");
        assert!(debug.contains("TtlCache"));
        assert!(debug.contains("300s"));
    }

    fn _assert_send_sync<T: Send + Sync>() {}
    #[test]
    fn test_cache_send_sync() {
        _assert_send_sync::<TtlCache<Vec<String>>>();
    }
}
