//! Repository trait for collection data access.

use crate::domain::entities::{Collection, NewCollection};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing collections.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CollectionRepository: Send + Sync {
    /// Creates a new collection.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_collection: NewCollection) -> Result<Collection, AppError>;

    /// Lists all collections owned by a user, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Collection>, AppError>;
}
