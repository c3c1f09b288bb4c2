//! Artwork creation, retrieval, and curation service.

use std::sync::Arc;

use crate::domain::entities::{Artwork, ArtworkFilters, ArtworkPage, ArtworkPatch, NewArtwork};
use crate::domain::repositories::{ArtworkRepository, GalleryRepository};
use crate::error::AppError;
use crate::utils::id_generator::generate_id;
use crate::utils::image_url::normalize_image_url;
use crate::utils::tags::parse_tags;
use serde_json::json;

/// Service for managing artworks.
///
/// Handles image URL normalization, tag parsing, gallery ownership checks,
/// and listing pagination. Cache interplay happens one layer up, in the
/// HTTP handlers; this service always talks to the system of record.
pub struct ArtworkService<A: ArtworkRepository, G: GalleryRepository> {
    artwork_repository: Arc<A>,
    gallery_repository: Arc<G>,
}

impl<A: ArtworkRepository, G: GalleryRepository> ArtworkService<A, G> {
    /// Creates a new artwork service.
    pub fn new(artwork_repository: Arc<A>, gallery_repository: Arc<G>) -> Self {
        Self {
            artwork_repository,
            gallery_repository,
        }
    }

    /// Creates an artwork for `user_id`.
    ///
    /// # Arguments
    ///
    /// - `tags` - Optional comma-separated tag list; parsed and de-duplicated
    /// - `gallery_id` - Optional gallery to attach; must exist and belong to the uploader
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if:
    /// - The image URL is malformed or not http(s)
    /// - A tag is invalid
    /// - The gallery does not exist or belongs to another user
    pub async fn create_artwork(
        &self,
        user_id: String,
        title: String,
        description: Option<String>,
        image_url: String,
        gallery_id: Option<String>,
        tags: Option<String>,
    ) -> Result<Artwork, AppError> {
        let image_url = normalize_image_url(&image_url)?;

        let tags = match tags.as_deref() {
            Some(raw) => parse_tags(raw)?,
            None => Vec::new(),
        };

        if let Some(ref gallery_id) = gallery_id {
            self.check_gallery_owner(gallery_id, &user_id).await?;
        }

        let new_artwork = NewArtwork {
            id: generate_id(),
            title,
            description,
            image_url,
            user_id,
            gallery_id,
            tags,
        };

        self.artwork_repository.create(new_artwork).await
    }

    /// Retrieves an artwork by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no artwork matches the id.
    pub async fn get_artwork(&self, id: &str) -> Result<Artwork, AppError> {
        self.artwork_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Artwork not found", json!({ "id": id })))
    }

    /// Lists one page of artworks matching the filters, newest first.
    ///
    /// Items and total count are fetched concurrently; the page count is
    /// derived from the total.
    pub async fn list_artworks(
        &self,
        page: u32,
        page_size: u32,
        filters: &ArtworkFilters,
    ) -> Result<ArtworkPage, AppError> {
        let (artworks, total) = tokio::try_join!(
            self.artwork_repository.list(page, page_size, filters),
            self.artwork_repository.count(filters),
        )?;

        Ok(ArtworkPage {
            artworks,
            total,
            pages: total.div_ceil(i64::from(page_size)),
            page,
        })
    }

    /// Partially updates an artwork owned by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the artwork does not exist or is
    /// not owned by the caller. Returns [`AppError::Validation`] if an
    /// attached gallery does not exist or belongs to another user.
    pub async fn update_artwork(
        &self,
        id: &str,
        user_id: &str,
        patch: ArtworkPatch,
    ) -> Result<Artwork, AppError> {
        let existing = self.get_artwork(id).await?;

        if existing.user_id != user_id {
            return Err(AppError::not_found(
                "Artwork not found",
                json!({ "id": id }),
            ));
        }

        if let Some(Some(ref gallery_id)) = patch.gallery_id {
            self.check_gallery_owner(gallery_id, user_id).await?;
        }

        self.artwork_repository.update(id, patch).await
    }

    /// Deletes an artwork owned by `user_id` and returns it.
    ///
    /// The deleted entity is returned so callers know which caches the
    /// deletion touches (listing namespace, single-item key, gallery key).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the artwork does not exist or is
    /// not owned by the caller.
    pub async fn delete_artwork(&self, id: &str, user_id: &str) -> Result<Artwork, AppError> {
        let existing = self.get_artwork(id).await?;

        if existing.user_id != user_id {
            return Err(AppError::not_found(
                "Artwork not found",
                json!({ "id": id }),
            ));
        }

        let deleted = self.artwork_repository.delete(id).await?;
        if !deleted {
            return Err(AppError::not_found(
                "Artwork not found",
                json!({ "id": id }),
            ));
        }

        Ok(existing)
    }

    /// Total number of stored artworks. Used by the health endpoint.
    pub async fn count_artworks(&self) -> Result<i64, AppError> {
        self.artwork_repository
            .count(&ArtworkFilters::default())
            .await
    }

    /// Verifies a gallery exists and is owned by `user_id`.
    async fn check_gallery_owner(&self, gallery_id: &str, user_id: &str) -> Result<(), AppError> {
        let gallery = self
            .gallery_repository
            .find_by_id(gallery_id)
            .await?
            .ok_or_else(|| {
                AppError::bad_request("Gallery not found", json!({ "gallery_id": gallery_id }))
            })?;

        if gallery.user_id != user_id {
            return Err(AppError::bad_request(
                "Gallery belongs to another user",
                json!({ "gallery_id": gallery_id }),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Gallery;
    use crate::domain::repositories::{MockArtworkRepository, MockGalleryRepository};
    use chrono::Utc;

    fn test_gallery(id: &str, user_id: &str) -> Gallery {
        Gallery {
            id: id.to_string(),
            name: "Seascapes".to_string(),
            description: None,
            user_id: user_id.to_string(),
            created_at: Utc::now(),
        }
    }

    fn test_artwork(id: &str, user_id: &str, gallery_id: Option<&str>) -> Artwork {
        Artwork {
            id: id.to_string(),
            title: "Dunes".to_string(),
            description: None,
            image_url: "https://cdn.example.com/dunes.png".to_string(),
            user_id: user_id.to_string(),
            gallery_id: gallery_id.map(String::from),
            tags: vec![],
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_artwork_success() {
        let mut artwork_repo = MockArtworkRepository::new();
        let gallery_repo = MockGalleryRepository::new();

        artwork_repo
            .expect_create()
            .withf(|new_artwork| {
                new_artwork.title == "Dunes"
                    && new_artwork.id.len() == 12
                    && new_artwork.tags == vec!["landscape", "oil"]
            })
            .times(1)
            .returning(|new_artwork| {
                Ok(Artwork {
                    id: new_artwork.id,
                    title: new_artwork.title,
                    description: new_artwork.description,
                    image_url: new_artwork.image_url,
                    user_id: new_artwork.user_id,
                    gallery_id: new_artwork.gallery_id,
                    tags: new_artwork.tags,
                    created_at: Utc::now(),
                })
            });

        let service = ArtworkService::new(Arc::new(artwork_repo), Arc::new(gallery_repo));

        let artwork = service
            .create_artwork(
                "u1".to_string(),
                "Dunes".to_string(),
                None,
                "https://cdn.example.com/dunes.png".to_string(),
                None,
                Some("landscape, oil".to_string()),
            )
            .await
            .unwrap();

        assert_eq!(artwork.user_id, "u1");
        assert_eq!(artwork.tags, vec!["landscape", "oil"]);
    }

    #[tokio::test]
    async fn test_create_artwork_checks_gallery_owner() {
        let mut artwork_repo = MockArtworkRepository::new();
        let mut gallery_repo = MockGalleryRepository::new();

        let gallery = test_gallery("g1", "u1");
        gallery_repo
            .expect_find_by_id()
            .withf(|id| id == "g1")
            .times(1)
            .returning(move |_| Ok(Some(gallery.clone())));

        artwork_repo
            .expect_create()
            .times(1)
            .returning(|new_artwork| {
                Ok(test_artwork(
                    &new_artwork.id,
                    &new_artwork.user_id,
                    new_artwork.gallery_id.as_deref(),
                ))
            });

        let service = ArtworkService::new(Arc::new(artwork_repo), Arc::new(gallery_repo));

        let artwork = service
            .create_artwork(
                "u1".to_string(),
                "Dunes".to_string(),
                None,
                "https://cdn.example.com/dunes.png".to_string(),
                Some("g1".to_string()),
                None,
            )
            .await
            .unwrap();

        assert_eq!(artwork.gallery_id.as_deref(), Some("g1"));
    }

    #[tokio::test]
    async fn test_create_artwork_rejects_foreign_gallery() {
        let mut artwork_repo = MockArtworkRepository::new();
        let mut gallery_repo = MockGalleryRepository::new();

        let gallery = test_gallery("g1", "someone-else");
        gallery_repo
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(gallery.clone())));

        artwork_repo.expect_create().times(0);

        let service = ArtworkService::new(Arc::new(artwork_repo), Arc::new(gallery_repo));

        let result = service
            .create_artwork(
                "u1".to_string(),
                "Dunes".to_string(),
                None,
                "https://cdn.example.com/dunes.png".to_string(),
                Some("g1".to_string()),
                None,
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_artwork_rejects_unknown_gallery() {
        let mut artwork_repo = MockArtworkRepository::new();
        let mut gallery_repo = MockGalleryRepository::new();

        gallery_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        artwork_repo.expect_create().times(0);

        let service = ArtworkService::new(Arc::new(artwork_repo), Arc::new(gallery_repo));

        let result = service
            .create_artwork(
                "u1".to_string(),
                "Dunes".to_string(),
                None,
                "https://cdn.example.com/dunes.png".to_string(),
                Some("missing".to_string()),
                None,
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_artwork_rejects_bad_image_url() {
        let artwork_repo = MockArtworkRepository::new();
        let gallery_repo = MockGalleryRepository::new();

        let service = ArtworkService::new(Arc::new(artwork_repo), Arc::new(gallery_repo));

        let result = service
            .create_artwork(
                "u1".to_string(),
                "Dunes".to_string(),
                None,
                "not-a-url".to_string(),
                None,
                None,
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_list_artworks_computes_pages() {
        let mut artwork_repo = MockArtworkRepository::new();
        let gallery_repo = MockGalleryRepository::new();

        artwork_repo
            .expect_list()
            .times(1)
            .returning(|_, _, _| Ok(vec![test_artwork("a1", "u1", None)]));
        artwork_repo.expect_count().times(1).returning(|_| Ok(21));

        let service = ArtworkService::new(Arc::new(artwork_repo), Arc::new(gallery_repo));

        let page = service
            .list_artworks(1, 10, &ArtworkFilters::default())
            .await
            .unwrap();

        assert_eq!(page.total, 21);
        assert_eq!(page.pages, 3);
        assert_eq!(page.page, 1);
        assert_eq!(page.artworks.len(), 1);
    }

    #[tokio::test]
    async fn test_get_artwork_not_found() {
        let mut artwork_repo = MockArtworkRepository::new();
        let gallery_repo = MockGalleryRepository::new();

        artwork_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = ArtworkService::new(Arc::new(artwork_repo), Arc::new(gallery_repo));

        let result = service.get_artwork("missing").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_artwork_enforces_ownership() {
        let mut artwork_repo = MockArtworkRepository::new();
        let gallery_repo = MockGalleryRepository::new();

        let existing = test_artwork("a1", "owner", None);
        artwork_repo
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        artwork_repo.expect_update().times(0);

        let service = ArtworkService::new(Arc::new(artwork_repo), Arc::new(gallery_repo));

        let result = service
            .update_artwork("a1", "intruder", ArtworkPatch::default())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_artwork_returns_deleted_entity() {
        let mut artwork_repo = MockArtworkRepository::new();
        let gallery_repo = MockGalleryRepository::new();

        let existing = test_artwork("a1", "u1", Some("g1"));
        artwork_repo
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        artwork_repo
            .expect_delete()
            .withf(|id| id == "a1")
            .times(1)
            .returning(|_| Ok(true));

        let service = ArtworkService::new(Arc::new(artwork_repo), Arc::new(gallery_repo));

        let deleted = service.delete_artwork("a1", "u1").await.unwrap();

        assert_eq!(deleted.id, "a1");
        assert_eq!(deleted.gallery_id.as_deref(), Some("g1"));
    }
}
