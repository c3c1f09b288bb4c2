//! Cache store trait and error types.

use async_trait::async_trait;

/// Errors that can occur during cache operations.
///
/// The cache is advisory: callers treat a failed `get` as a miss and a
/// failed `set` as best-effort. Only invalidation failures are surfaced,
/// and then only as warnings.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// The backing store could not be reached or the operation timed out.
    #[error("cache backend unavailable: {0}")]
    Unavailable(String),

    /// A stored payload could not be decoded. Treated as a miss.
    #[error("cache payload could not be decoded: {0}")]
    Deserialization(#[from] serde_json::Error),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for the key/value store backing the cache.
///
/// Payloads cross this boundary as JSON text; the typed encode/decode
/// contract lives in [`crate::infrastructure::cache::CachePolicy`], which
/// keeps this trait object-safe so a store can be injected as
/// `Arc<dyn CacheStore>` and replaced with a fake in tests.
///
/// Implementations must be thread-safe. No entry outlives its TTL
/// regardless of access pattern (no sliding expiration).
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisStore`] - Redis-backed store
/// - [`crate::infrastructure::cache::MemoryStore`] - In-process store for tests and local runs
/// - [`crate::infrastructure::cache::NullStore`] - No-op store for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Retrieves the raw payload stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(payload))` if the key exists and has not expired
    /// - `Ok(None)` if the key is absent or expired (not an error)
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Unavailable`] if the backend cannot be reached.
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores `payload` under `key` with an expiry of `ttl_seconds` from now.
    ///
    /// Overwrites any existing entry. Idempotent: repeating the same write
    /// simply refreshes the expiry.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Unavailable`] if the backend cannot be reached.
    async fn set(&self, key: &str, payload: &str, ttl_seconds: u64) -> CacheResult<()>;

    /// Deletes a single key. Returns the number of keys removed (0 or 1).
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Unavailable`] if the backend cannot be reached.
    async fn delete(&self, key: &str) -> CacheResult<u64>;

    /// Deletes every key matching a glob-style pattern (e.g. `artworks:*`).
    ///
    /// Zero matches is a no-op, not an error. Partial failure leaves some
    /// stale entries behind, which only costs extra misses later.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Unavailable`] if the backend cannot be reached.
    async fn delete_matching(&self, pattern: &str) -> CacheResult<u64>;

    /// Checks if the store backend is healthy.
    ///
    /// Used by health check endpoints to report cache status.
    async fn health_check(&self) -> bool;
}
