//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.
//! Handlers own the cache interplay: reads go through
//! [`crate::infrastructure::cache::CachePolicy::read_through`], mutations
//! invalidate after the service call commits.

pub mod artworks;
pub mod collections;
pub mod galleries;
pub mod health;

pub use artworks::{
    create_artwork_handler, delete_artwork_handler, get_artwork_handler, list_artworks_handler,
    update_artwork_handler,
};
pub use collections::{create_collection_handler, list_collections_handler};
pub use galleries::{create_gallery_handler, list_galleries_handler};
pub use health::health_handler;
