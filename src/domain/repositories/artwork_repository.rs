//! Repository trait for artwork data access.

use crate::domain::entities::{Artwork, ArtworkFilters, ArtworkPatch, NewArtwork};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing artworks.
///
/// Provides CRUD operations including filtered pagination and tag handling.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgArtworkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArtworkRepository: Send + Sync {
    /// Creates a new artwork together with its tag associations.
    ///
    /// Tags that do not exist yet are created; existing tags are reused.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the generated id collides.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_artwork: NewArtwork) -> Result<Artwork, AppError>;

    /// Finds an artwork by id, with its tags.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: &str) -> Result<Option<Artwork>, AppError>;

    /// Lists artworks matching the filters, newest first.
    ///
    /// # Arguments
    ///
    /// - `page` - Page number (1-indexed)
    /// - `page_size` - Number of items per page
    /// - `filters` - Optional gallery/user/tag constraints
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(
        &self,
        page: u32,
        page_size: u32,
        filters: &ArtworkFilters,
    ) -> Result<Vec<Artwork>, AppError>;

    /// Counts artworks matching the filters.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self, filters: &ArtworkFilters) -> Result<i64, AppError>;

    /// Partially updates an artwork.
    ///
    /// Only fields present in [`ArtworkPatch`] are modified; `None` fields
    /// are unchanged. When `patch.tags` is set, the tag associations are
    /// replaced wholesale.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no artwork matches `id`.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: &str, patch: ArtworkPatch) -> Result<Artwork, AppError>;

    /// Deletes an artwork and its tag associations.
    ///
    /// Returns `Ok(true)` if the artwork was found and deleted, `Ok(false)`
    /// if not found.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;
}
