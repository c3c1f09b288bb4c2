//! Read-through cache policy over a [`CacheStore`].

use super::store::{CacheError, CacheResult, CacheStore};
use crate::error::AppError;
use metrics::counter;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, warn};

/// Typed caching contract consumed by request handlers.
///
/// Wraps an injected store with a single fixed TTL and the read-through /
/// invalidate flow. The cache is advisory: every store failure on the read
/// path degrades to direct computation against the system of record, so
/// losing the store costs latency, never correctness.
///
/// There is no cross-request coordination. Two concurrent misses on the
/// same key both compute and both write; last write wins for that key.
#[derive(Clone)]
pub struct CachePolicy {
    store: Arc<dyn CacheStore>,
    ttl_seconds: u64,
}

impl CachePolicy {
    /// Creates a policy over `store` applying `ttl_seconds` to every write.
    pub fn new(store: Arc<dyn CacheStore>, ttl_seconds: u64) -> Self {
        Self { store, ttl_seconds }
    }

    /// The fixed TTL applied to all cache writes, in seconds.
    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }

    /// Fetches `key` from the cache, computing and storing on miss.
    ///
    /// # Behavior
    ///
    /// - **Hit**: the decoded value is returned; `compute` is not invoked.
    /// - **Miss**: `compute` runs, its result is stored best-effort with the
    ///   fixed TTL and returned.
    /// - **Store unavailable**: treated as a miss; the request proceeds
    ///   against the system of record.
    /// - **Corrupt payload**: treated as a miss; the entry is deleted
    ///   best-effort so it cannot keep failing to decode.
    ///
    /// # Errors
    ///
    /// Only `compute` failures are returned, unchanged. Nothing is cached
    /// for a failed computation.
    pub async fn read_through<T, F, Fut>(&self, key: &str, compute: F) -> Result<T, AppError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, AppError>>,
    {
        match self.store.get(key).await {
            Ok(Some(payload)) => match serde_json::from_str::<T>(&payload) {
                Ok(value) => {
                    debug!("Cache HIT: {}", key);
                    counter!("artshare_cache_hits_total").increment(1);
                    return Ok(value);
                }
                Err(e) => {
                    warn!(key, error = %CacheError::Deserialization(e), "Dropping undecodable cache entry");
                    counter!("artshare_cache_decode_failures_total").increment(1);

                    if let Err(e) = self.store.delete(key).await {
                        warn!(key, error = %e, "Failed to drop undecodable cache entry");
                    }
                }
            },
            Ok(None) => {
                debug!("Cache MISS: {}", key);
            }
            Err(e) => {
                warn!(key, error = %e, "Cache read failed, treating as miss");
                counter!("artshare_cache_store_errors_total").increment(1);
            }
        }

        counter!("artshare_cache_misses_total").increment(1);

        let value = compute().await?;

        match serde_json::to_string(&value) {
            Ok(payload) => {
                if let Err(e) = self.store.set(key, &payload, self.ttl_seconds).await {
                    warn!(key, error = %e, "Cache write failed, entry not stored");
                    counter!("artshare_cache_store_errors_total").increment(1);
                } else {
                    debug!("Cache SET: {} (TTL: {}s)", key, self.ttl_seconds);
                }
            }
            Err(e) => {
                warn!(key, error = %e, "Cache payload failed to serialize, entry not stored");
            }
        }

        Ok(value)
    }

    /// Removes every cached entry under `namespace`.
    ///
    /// Called by mutation handlers after the mutation commits, so the next
    /// read under the namespace recomputes from fresh data. Invalidation is
    /// part of the mutation's completion; callers log the error as a
    /// warning (stale entries then persist until TTL expiry) but never fail
    /// the mutation over it.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Unavailable`] if the store cannot be reached.
    pub async fn invalidate_namespace(&self, namespace: &str) -> CacheResult<u64> {
        let pattern = super::keys::namespace_pattern(namespace);
        let removed = self.store.delete_matching(&pattern).await?;

        if removed > 0 {
            debug!("Cache INVALIDATE: {} ({} entries)", pattern, removed);
        }
        counter!("artshare_cache_invalidations_total").increment(1);

        Ok(removed)
    }

    /// Removes one cached entry.
    ///
    /// Same failure contract as [`Self::invalidate_namespace`].
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Unavailable`] if the store cannot be reached.
    pub async fn invalidate_key(&self, key: &str) -> CacheResult<()> {
        let removed = self.store.delete(key).await?;

        if removed > 0 {
            debug!("Cache INVALIDATE: {}", key);
        }
        counter!("artshare_cache_invalidations_total").increment(1);

        Ok(())
    }

    /// Checks the backing store's liveness.
    pub async fn health_check(&self) -> bool {
        self.store.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::super::memory_store::MemoryStore;
    use super::super::store::MockCacheStore;
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Payload {
        total: i64,
        items: Vec<String>,
    }

    fn sample_payload() -> Payload {
        Payload {
            total: 3,
            items: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        }
    }

    #[tokio::test]
    async fn test_miss_computes_and_stores() {
        let store = Arc::new(MemoryStore::new());
        let policy = CachePolicy::new(store.clone(), 3600);
        let calls = AtomicUsize::new(0);

        let value: Payload = policy
            .read_through("artworks:1:10:abc", || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(sample_payload())
            })
            .await
            .unwrap();

        assert_eq!(value, sample_payload());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_hit_skips_compute() {
        let store = Arc::new(MemoryStore::new());
        let policy = CachePolicy::new(store, 3600);
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            let _: Payload = policy
                .read_through("artworks:1:10:abc", || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(sample_payload())
                })
                .await
                .unwrap();
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_compute_error_propagates_and_caches_nothing() {
        let store = Arc::new(MemoryStore::new());
        let policy = CachePolicy::new(store.clone(), 3600);

        let result: Result<Payload, _> = policy
            .read_through("artworks:1:10:abc", || async {
                Err(AppError::internal("query failed", json!({})))
            })
            .await;

        assert!(result.is_err());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_unavailable_store_degrades_to_compute() {
        let mut mock = MockCacheStore::new();
        mock.expect_get()
            .returning(|_| Err(CacheError::Unavailable("refused".to_string())));
        mock.expect_set()
            .returning(|_, _, _| Err(CacheError::Unavailable("refused".to_string())));

        let policy = CachePolicy::new(Arc::new(mock), 3600);

        let value: Payload = policy
            .read_through("artworks:1:10:abc", || async { Ok(sample_payload()) })
            .await
            .unwrap();

        assert_eq!(value, sample_payload());
    }

    #[tokio::test]
    async fn test_corrupt_entry_recomputes_and_drops_it() {
        let store = Arc::new(MemoryStore::new());
        store.set("artwork:a1", "{not json", 3600).await.unwrap();

        let policy = CachePolicy::new(store.clone(), 3600);
        let calls = AtomicUsize::new(0);

        let value: Payload = policy
            .read_through("artwork:a1", || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(sample_payload())
            })
            .await
            .unwrap();

        assert_eq!(value, sample_payload());
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // The corrupt payload was replaced by the recomputed one.
        assert_eq!(
            store.get("artwork:a1").await.unwrap(),
            Some(serde_json::to_string(&sample_payload()).unwrap())
        );
    }

    #[tokio::test]
    async fn test_invalidate_namespace_forces_recompute() {
        let store = Arc::new(MemoryStore::new());
        let policy = CachePolicy::new(store, 3600);
        let calls = AtomicUsize::new(0);

        let compute = || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(sample_payload())
        };

        let _: Payload = policy.read_through("artworks:1:10:abc", compute).await.unwrap();
        policy.invalidate_namespace("artworks").await.unwrap();
        let _: Payload = policy.read_through("artworks:1:10:abc", compute).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_invalidate_namespace_leaves_other_namespaces() {
        let store = Arc::new(MemoryStore::new());
        let policy = CachePolicy::new(store.clone(), 3600);

        store.set("artworks:1:10:abc", "{}", 3600).await.unwrap();
        store.set("galleries:u1", "{}", 3600).await.unwrap();

        let removed = policy.invalidate_namespace("artworks").await.unwrap();

        assert_eq!(removed, 1);
        assert_eq!(store.get("galleries:u1").await.unwrap(), Some("{}".to_string()));
    }

    #[tokio::test]
    async fn test_invalidate_surfaces_store_failure() {
        let mut mock = MockCacheStore::new();
        mock.expect_delete_matching()
            .returning(|_| Err(CacheError::Unavailable("refused".to_string())));

        let policy = CachePolicy::new(Arc::new(mock), 3600);

        assert!(policy.invalidate_namespace("artworks").await.is_err());
    }
}
