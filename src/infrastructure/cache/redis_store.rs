//! Redis-backed cache store implementation.

use super::store::{CacheError, CacheResult, CacheStore};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use std::future::Future;
use std::time::Duration;
use tokio::time::timeout;
use tracing::info;

/// Redis store for cached query results.
///
/// Uses connection pooling via `ConnectionManager` for efficient connection
/// reuse. Every operation runs under a bounded timeout; an elapsed timeout
/// is reported as [`CacheError::Unavailable`], the same as a refused
/// connection, so callers degrade to direct computation either way.
pub struct RedisStore {
    client: ConnectionManager,
    op_timeout: Duration,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `op_timeout` - Per-operation deadline; controlled via `CACHE_OP_TIMEOUT_MS`
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Unavailable`] if the URL is invalid, the
    /// connection cannot be established, or the PING health check fails.
    pub async fn connect(redis_url: &str, op_timeout: Duration) -> CacheResult<Self> {
        info!("Connecting to Redis at {}", redis_url);

        let client = Client::open(redis_url).map_err(|e| {
            CacheError::Unavailable(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| CacheError::Unavailable(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::Unavailable(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self {
            client: manager,
            op_timeout,
        })
    }

    /// Runs a Redis future under the configured operation timeout.
    async fn bounded<T, F>(&self, op: &str, fut: F) -> CacheResult<T>
    where
        F: Future<Output = redis::RedisResult<T>>,
    {
        timeout(self.op_timeout, fut)
            .await
            .map_err(|_| CacheError::Unavailable(format!("Redis {} timed out", op)))?
            .map_err(|e| CacheError::Unavailable(format!("Redis {} failed: {}", op, e)))
    }
}

#[async_trait]
impl CacheStore for RedisStore {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let mut conn = self.client.clone();
        self.bounded("GET", conn.get::<_, Option<String>>(key)).await
    }

    async fn set(&self, key: &str, payload: &str, ttl_seconds: u64) -> CacheResult<()> {
        let mut conn = self.client.clone();
        self.bounded("SET", conn.set_ex::<_, _, ()>(key, payload, ttl_seconds))
            .await
    }

    async fn delete(&self, key: &str) -> CacheResult<u64> {
        let mut conn = self.client.clone();
        self.bounded("DEL", conn.del::<_, u64>(key)).await
    }

    async fn delete_matching(&self, pattern: &str) -> CacheResult<u64> {
        let mut conn = self.client.clone();

        let keys: Vec<String> = self
            .bounded("KEYS", conn.keys::<_, Vec<String>>(pattern))
            .await?;

        if keys.is_empty() {
            return Ok(0);
        }

        let mut conn = self.client.clone();
        self.bounded("DEL", conn.del::<_, u64>(keys)).await
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        timeout(self.op_timeout, conn.ping::<()>())
            .await
            .map(|r| r.is_ok())
            .unwrap_or(false)
    }
}
