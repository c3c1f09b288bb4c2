//! Collection management service.

use std::sync::Arc;

use crate::domain::entities::{Collection, NewCollection};
use crate::domain::repositories::CollectionRepository;
use crate::error::AppError;
use crate::utils::id_generator::generate_id;

/// Service for creating and listing user collections.
pub struct CollectionService<C: CollectionRepository> {
    collection_repository: Arc<C>,
}

impl<C: CollectionRepository> CollectionService<C> {
    /// Creates a new collection service.
    pub fn new(collection_repository: Arc<C>) -> Self {
        Self {
            collection_repository,
        }
    }

    /// Creates a collection for `user_id`.
    pub async fn create_collection(
        &self,
        user_id: String,
        name: String,
    ) -> Result<Collection, AppError> {
        let new_collection = NewCollection {
            id: generate_id(),
            name,
            user_id,
        };

        self.collection_repository.create(new_collection).await
    }

    /// Lists all collections owned by a user, newest first.
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<Collection>, AppError> {
        self.collection_repository.list_for_user(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockCollectionRepository;
    use chrono::Utc;

    #[tokio::test]
    async fn test_create_collection_generates_id() {
        let mut collection_repo = MockCollectionRepository::new();

        collection_repo
            .expect_create()
            .withf(|new_collection| new_collection.id.len() == 12)
            .times(1)
            .returning(|new_collection| {
                Ok(Collection {
                    id: new_collection.id,
                    name: new_collection.name,
                    user_id: new_collection.user_id,
                    created_at: Utc::now(),
                })
            });

        let service = CollectionService::new(Arc::new(collection_repo));

        let collection = service
            .create_collection("u1".to_string(), "Favorites".to_string())
            .await
            .unwrap();

        assert_eq!(collection.name, "Favorites");
    }
}
