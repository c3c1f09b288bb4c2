//! Cache key construction.
//!
//! Every cached value lives under a namespace prefix, and every mutation
//! invalidates by namespace pattern, so key layout is the contract between
//! readers and writers. All keys are built here; handlers never format key
//! strings themselves.
//!
//! Listing keys embed a digest of the active filters rather than the raw
//! filter values. The digest is computed over a canonical JSON encoding
//! (object keys serialize sorted, since `serde_json`'s map is ordered), so
//! two filter objects with the same content always produce the same key no
//! matter how they were assembled. Without that guarantee equivalent
//! requests would fragment across distinct cache entries.

use crate::domain::entities::ArtworkFilters;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Namespace for single artworks, keyed by id.
pub const ARTWORK: &str = "artwork";

/// Namespace for paginated artwork listings.
pub const ARTWORKS: &str = "artworks";

/// Namespace for per-user gallery listings.
pub const GALLERIES: &str = "galleries";

/// Namespace for per-user collection listings.
pub const COLLECTIONS: &str = "collections";

/// Length of the hex filter digest embedded in listing keys.
const FILTER_DIGEST_LENGTH: usize = 16;

/// Key for a single artwork.
pub fn artwork(id: &str) -> String {
    format!("{}:{}", ARTWORK, id)
}

/// Key for one page of an artwork listing under the given filters.
pub fn artwork_listing(page: u32, page_size: u32, filters: &ArtworkFilters) -> String {
    listing(ARTWORKS, page, page_size, filters)
}

/// Key for a user's gallery listing.
pub fn user_galleries(user_id: &str) -> String {
    format!("{}:{}", GALLERIES, user_id)
}

/// Key for a user's collection listing.
pub fn user_collections(user_id: &str) -> String {
    format!("{}:{}", COLLECTIONS, user_id)
}

/// Invalidation pattern covering every key in a namespace.
pub fn namespace_pattern(namespace: &str) -> String {
    format!("{}:*", namespace)
}

/// Generic listing key: `{namespace}:{page}:{page_size}:{filter_digest}`.
pub fn listing<F: Serialize>(namespace: &str, page: u32, page_size: u32, filters: &F) -> String {
    format!(
        "{}:{}:{}:{}",
        namespace,
        page,
        page_size,
        filter_digest(filters)
    )
}

/// Digest of a filter value over its canonical JSON encoding.
///
/// Canonical means object keys are serialized in sorted order at every
/// nesting level, which `serde_json::Value` guarantees (its object type is
/// a BTreeMap). The digest is a truncated SHA-256 in lowercase hex.
pub fn filter_digest<F: Serialize>(filters: &F) -> String {
    let canonical = serde_json::to_value(filters)
        .map(|v| v.to_string())
        .unwrap_or_else(|_| "null".to_string());

    let digest = Sha256::digest(canonical.as_bytes());
    hex::encode(digest)[..FILTER_DIGEST_LENGTH].to_string()
}
