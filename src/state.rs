//! Shared application state injected into request handlers.

use std::sync::Arc;

use crate::application::services::{ArtworkService, CollectionService, GalleryService};
use crate::infrastructure::cache::CachePolicy;
use crate::infrastructure::persistence::{
    PgArtworkRepository, PgCollectionRepository, PgGalleryRepository,
};

/// Application state shared across all handlers.
///
/// Built once at startup in [`crate::server::run`] and cloned per request
/// by axum; everything inside is reference-counted. The cache policy is
/// constructed here rather than accessed as a global so tests can inject a
/// fake store.
#[derive(Clone)]
pub struct AppState {
    pub artwork_service: Arc<ArtworkService<PgArtworkRepository, PgGalleryRepository>>,
    pub gallery_service: Arc<GalleryService<PgGalleryRepository>>,
    pub collection_service: Arc<CollectionService<PgCollectionRepository>>,
    pub cache: CachePolicy,
}
