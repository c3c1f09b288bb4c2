//! Caching layer fronting paginated listings and single-item lookups.
//!
//! Two pieces:
//!
//! - a [`CacheStore`] trait over a remote key/value store (get,
//!   set-with-expiry, pattern delete) with [`RedisStore`], [`MemoryStore`],
//!   and [`NullStore`] implementations;
//! - a [`CachePolicy`] that builds keys ([`keys`]), applies one fixed TTL to
//!   every write, and exposes the typed read-through / invalidate contract
//!   to request handlers.
//!
//! The cache holds derived, time-bounded copies only; the database remains
//! the source of truth, and losing every entry costs latency, not
//! correctness.

pub mod keys;
mod memory_store;
mod null_store;
mod policy;
mod redis_store;
mod store;

pub use memory_store::MemoryStore;
pub use null_store::NullStore;
pub use policy::CachePolicy;
pub use redis_store::RedisStore;
pub use store::{CacheError, CacheResult, CacheStore};
