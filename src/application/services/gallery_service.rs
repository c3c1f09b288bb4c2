//! Gallery management service.

use std::sync::Arc;

use crate::domain::entities::{Gallery, NewGallery};
use crate::domain::repositories::GalleryRepository;
use crate::error::AppError;
use crate::utils::id_generator::generate_id;

/// Service for creating and listing user galleries.
pub struct GalleryService<G: GalleryRepository> {
    gallery_repository: Arc<G>,
}

impl<G: GalleryRepository> GalleryService<G> {
    /// Creates a new gallery service.
    pub fn new(gallery_repository: Arc<G>) -> Self {
        Self { gallery_repository }
    }

    /// Creates a gallery for `user_id`.
    pub async fn create_gallery(
        &self,
        user_id: String,
        name: String,
        description: Option<String>,
    ) -> Result<Gallery, AppError> {
        let new_gallery = NewGallery {
            id: generate_id(),
            name,
            description,
            user_id,
        };

        self.gallery_repository.create(new_gallery).await
    }

    /// Lists all galleries owned by a user, newest first.
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<Gallery>, AppError> {
        self.gallery_repository.list_for_user(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockGalleryRepository;
    use chrono::Utc;

    #[tokio::test]
    async fn test_create_gallery_generates_id() {
        let mut gallery_repo = MockGalleryRepository::new();

        gallery_repo
            .expect_create()
            .withf(|new_gallery| new_gallery.id.len() == 12 && new_gallery.user_id == "u1")
            .times(1)
            .returning(|new_gallery| {
                Ok(Gallery {
                    id: new_gallery.id,
                    name: new_gallery.name,
                    description: new_gallery.description,
                    user_id: new_gallery.user_id,
                    created_at: Utc::now(),
                })
            });

        let service = GalleryService::new(Arc::new(gallery_repo));

        let gallery = service
            .create_gallery("u1".to_string(), "Seascapes".to_string(), None)
            .await
            .unwrap();

        assert_eq!(gallery.name, "Seascapes");
        assert_eq!(gallery.id.len(), 12);
    }

    #[tokio::test]
    async fn test_list_for_user_passes_through() {
        let mut gallery_repo = MockGalleryRepository::new();

        gallery_repo
            .expect_list_for_user()
            .withf(|user_id| user_id == "u1")
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = GalleryService::new(Arc::new(gallery_repo));

        assert!(service.list_for_user("u1").await.unwrap().is_empty());
    }
}
