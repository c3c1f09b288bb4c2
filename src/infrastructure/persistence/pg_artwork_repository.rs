//! PostgreSQL implementation of the artwork repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Artwork, ArtworkFilters, ArtworkPatch, NewArtwork};
use crate::domain::repositories::ArtworkRepository;
use crate::error::AppError;
use serde_json::json;

/// Row shape shared by artwork SELECTs; tags arrive aggregated as an array.
#[derive(sqlx::FromRow)]
struct ArtworkRow {
    id: String,
    title: String,
    description: Option<String>,
    image_url: String,
    user_id: String,
    gallery_id: Option<String>,
    tags: Vec<String>,
    created_at: DateTime<Utc>,
}

impl From<ArtworkRow> for Artwork {
    fn from(row: ArtworkRow) -> Self {
        Artwork {
            id: row.id,
            title: row.title,
            description: row.description,
            image_url: row.image_url,
            user_id: row.user_id,
            gallery_id: row.gallery_id,
            tags: row.tags,
            created_at: row.created_at,
        }
    }
}

/// SELECT list with per-artwork tag aggregation, shared by the artwork queries.
const SELECT_ARTWORK: &str = r#"
SELECT a.id, a.title, a.description, a.image_url, a.user_id, a.gallery_id,
       coalesce(array_agg(t.name ORDER BY t.name) FILTER (WHERE t.name IS NOT NULL), '{}') AS tags,
       a.created_at
FROM artworks a
LEFT JOIN artwork_tags at ON at.artwork_id = a.id
LEFT JOIN tags t ON t.id = at.tag_id
"#;

/// Optional-filter predicate used by list and count.
///
/// The tag filter goes through EXISTS so a match does not collapse the tag
/// aggregation down to the filtered tag.
const FILTER_PREDICATE: &str = r#"
WHERE ($1::text IS NULL OR a.gallery_id = $1)
  AND ($2::text IS NULL OR a.user_id = $2)
  AND ($3::text IS NULL OR EXISTS (
        SELECT 1
        FROM artwork_tags ft
        JOIN tags ftag ON ftag.id = ft.tag_id
        WHERE ft.artwork_id = a.id AND ftag.name = $3))
"#;

/// PostgreSQL repository for artwork storage and retrieval.
///
/// Queries are bound at runtime so the crate builds without a database;
/// the schema contract lives in `migrations/`.
pub struct PgArtworkRepository {
    pool: Arc<PgPool>,
}

impl PgArtworkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Upserts each tag by name and links it to the artwork.
async fn link_tags(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    artwork_id: &str,
    tags: &[String],
) -> Result<(), sqlx::Error> {
    for tag in tags {
        sqlx::query("INSERT INTO tags (name) VALUES ($1) ON CONFLICT (name) DO NOTHING")
            .bind(tag)
            .execute(&mut **tx)
            .await?;

        sqlx::query(
            r#"
            INSERT INTO artwork_tags (artwork_id, tag_id)
            SELECT $1, id FROM tags WHERE name = $2
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(artwork_id)
        .bind(tag)
        .execute(&mut **tx)
        .await?;
    }

    Ok(())
}

#[async_trait]
impl ArtworkRepository for PgArtworkRepository {
    async fn create(&self, new_artwork: NewArtwork) -> Result<Artwork, AppError> {
        let mut tx = self.pool.begin().await?;

        let created_at = sqlx::query_scalar::<_, DateTime<Utc>>(
            r#"
            INSERT INTO artworks (id, title, description, image_url, user_id, gallery_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING created_at
            "#,
        )
        .bind(&new_artwork.id)
        .bind(&new_artwork.title)
        .bind(&new_artwork.description)
        .bind(&new_artwork.image_url)
        .bind(&new_artwork.user_id)
        .bind(&new_artwork.gallery_id)
        .fetch_one(&mut *tx)
        .await?;

        link_tags(&mut tx, &new_artwork.id, &new_artwork.tags).await?;

        tx.commit().await?;

        // Tags are reported sorted, matching how SELECTs aggregate them.
        let mut tags = new_artwork.tags;
        tags.sort();

        Ok(Artwork {
            id: new_artwork.id,
            title: new_artwork.title,
            description: new_artwork.description,
            image_url: new_artwork.image_url,
            user_id: new_artwork.user_id,
            gallery_id: new_artwork.gallery_id,
            tags,
            created_at,
        })
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Artwork>, AppError> {
        let sql = format!("{} WHERE a.id = $1 GROUP BY a.id", SELECT_ARTWORK);

        let row = sqlx::query_as::<_, ArtworkRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Artwork::from))
    }

    async fn list(
        &self,
        page: u32,
        page_size: u32,
        filters: &ArtworkFilters,
    ) -> Result<Vec<Artwork>, AppError> {
        let offset = i64::from(page.saturating_sub(1)) * i64::from(page_size);

        let sql = format!(
            "{} {} GROUP BY a.id ORDER BY a.created_at DESC LIMIT $4 OFFSET $5",
            SELECT_ARTWORK, FILTER_PREDICATE
        );

        let rows = sqlx::query_as::<_, ArtworkRow>(&sql)
            .bind(&filters.gallery_id)
            .bind(&filters.user_id)
            .bind(&filters.tag)
            .bind(i64::from(page_size))
            .bind(offset)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Artwork::from).collect())
    }

    async fn count(&self, filters: &ArtworkFilters) -> Result<i64, AppError> {
        let sql = format!("SELECT count(*) FROM artworks a {}", FILTER_PREDICATE);

        let total = sqlx::query_scalar::<_, i64>(&sql)
            .bind(&filters.gallery_id)
            .bind(&filters.user_id)
            .bind(&filters.tag)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(total)
    }

    async fn update(&self, id: &str, patch: ArtworkPatch) -> Result<Artwork, AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE artworks SET
                title       = coalesce($2, title),
                description = CASE WHEN $3 THEN $4 ELSE description END,
                gallery_id  = CASE WHEN $5 THEN $6 ELSE gallery_id END
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&patch.title)
        .bind(patch.description.is_some())
        .bind(patch.description.clone().flatten())
        .bind(patch.gallery_id.is_some())
        .bind(patch.gallery_id.clone().flatten())
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Artwork not found",
                json!({ "id": id }),
            ));
        }

        if let Some(tags) = &patch.tags {
            sqlx::query("DELETE FROM artwork_tags WHERE artwork_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;

            link_tags(&mut tx, id, tags).await?;
        }

        tx.commit().await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Artwork not found", json!({ "id": id })))
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM artworks WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
