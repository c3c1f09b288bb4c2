//! Repository trait for gallery data access.

use crate::domain::entities::{Gallery, NewGallery};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing galleries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GalleryRepository: Send + Sync {
    /// Creates a new gallery.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_gallery: NewGallery) -> Result<Gallery, AppError>;

    /// Finds a gallery by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: &str) -> Result<Option<Gallery>, AppError>;

    /// Lists all galleries owned by a user, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Gallery>, AppError>;
}
