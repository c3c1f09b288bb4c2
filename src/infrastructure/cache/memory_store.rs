//! In-process cache store with real TTL semantics.

use super::store::{CacheResult, CacheStore};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;

/// An in-memory store implementing the full [`CacheStore`] contract,
/// including expiry and glob pattern deletion.
///
/// Primarily the injectable fake for tests; also usable for single-process
/// deployments that want caching without a Redis instance. Expired entries
/// are dropped lazily on access.
///
/// Uses `tokio::time::Instant` so tests running under a paused runtime
/// clock can advance time past the TTL deterministically.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Entry>>,
}

struct Entry {
    payload: String,
    expires_at: Instant,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (unexpired) entries.
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .lock()
            .expect("cache map lock poisoned")
            .values()
            .filter(|e| e.expires_at > now)
            .count()
    }

    /// Returns true if the store holds no live entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Matches a key against a glob pattern where `*` matches any run of
/// characters, the only wildcard the invalidation contract uses.
fn glob_match(pattern: &str, key: &str) -> bool {
    let Some((prefix, tail)) = pattern.split_once('*') else {
        return pattern == key;
    };

    if !key.starts_with(prefix) {
        return false;
    }

    let mut rest = &key[prefix.len()..];
    let segments: Vec<&str> = tail.split('*').collect();

    for (i, segment) in segments.iter().enumerate() {
        let is_last = i == segments.len() - 1;

        if segment.is_empty() {
            if is_last {
                return true;
            }
            continue;
        }

        if is_last {
            return rest.ends_with(segment);
        }

        match rest.find(segment) {
            Some(pos) => rest = &rest[pos + segment.len()..],
            None => return false,
        }
    }

    true
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let mut entries = self.entries.lock().expect("cache map lock poisoned");

        match entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => Ok(Some(entry.payload.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, payload: &str, ttl_seconds: u64) -> CacheResult<()> {
        let entry = Entry {
            payload: payload.to_string(),
            expires_at: Instant::now() + Duration::from_secs(ttl_seconds),
        };

        self.entries
            .lock()
            .expect("cache map lock poisoned")
            .insert(key.to_string(), entry);

        Ok(())
    }

    async fn delete(&self, key: &str) -> CacheResult<u64> {
        let removed = self
            .entries
            .lock()
            .expect("cache map lock poisoned")
            .remove(key);

        Ok(u64::from(removed.is_some()))
    }

    async fn delete_matching(&self, pattern: &str) -> CacheResult<u64> {
        let mut entries = self.entries.lock().expect("cache map lock poisoned");

        let before = entries.len();
        entries.retain(|key, _| !glob_match(pattern, key));

        Ok((before - entries.len()) as u64)
    }

    async fn health_check(&self) -> bool {
        true
    }
}
