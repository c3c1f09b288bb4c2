//! PostgreSQL implementation of the gallery repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Gallery, NewGallery};
use crate::domain::repositories::GalleryRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct GalleryRow {
    id: String,
    name: String,
    description: Option<String>,
    user_id: String,
    created_at: DateTime<Utc>,
}

impl From<GalleryRow> for Gallery {
    fn from(row: GalleryRow) -> Self {
        Gallery {
            id: row.id,
            name: row.name,
            description: row.description,
            user_id: row.user_id,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL repository for gallery storage and retrieval.
pub struct PgGalleryRepository {
    pool: Arc<PgPool>,
}

impl PgGalleryRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GalleryRepository for PgGalleryRepository {
    async fn create(&self, new_gallery: NewGallery) -> Result<Gallery, AppError> {
        let row = sqlx::query_as::<_, GalleryRow>(
            r#"
            INSERT INTO galleries (id, name, description, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, user_id, created_at
            "#,
        )
        .bind(&new_gallery.id)
        .bind(&new_gallery.name)
        .bind(&new_gallery.description)
        .bind(&new_gallery.user_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Gallery>, AppError> {
        let row = sqlx::query_as::<_, GalleryRow>(
            "SELECT id, name, description, user_id, created_at FROM galleries WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Gallery::from))
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Gallery>, AppError> {
        let rows = sqlx::query_as::<_, GalleryRow>(
            r#"
            SELECT id, name, description, user_id, created_at
            FROM galleries
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Gallery::from).collect())
    }
}
