//! PostgreSQL implementation of the collection repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Collection, NewCollection};
use crate::domain::repositories::CollectionRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct CollectionRow {
    id: String,
    name: String,
    user_id: String,
    created_at: DateTime<Utc>,
}

impl From<CollectionRow> for Collection {
    fn from(row: CollectionRow) -> Self {
        Collection {
            id: row.id,
            name: row.name,
            user_id: row.user_id,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL repository for collection storage and retrieval.
pub struct PgCollectionRepository {
    pool: Arc<PgPool>,
}

impl PgCollectionRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CollectionRepository for PgCollectionRepository {
    async fn create(&self, new_collection: NewCollection) -> Result<Collection, AppError> {
        let row = sqlx::query_as::<_, CollectionRow>(
            r#"
            INSERT INTO collections (id, name, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, name, user_id, created_at
            "#,
        )
        .bind(&new_collection.id)
        .bind(&new_collection.name)
        .bind(&new_collection.user_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Collection>, AppError> {
        let rows = sqlx::query_as::<_, CollectionRow>(
            r#"
            SELECT id, name, user_id, created_at
            FROM collections
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Collection::from).collect())
    }
}
