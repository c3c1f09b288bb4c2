//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, cache setup, service wiring, and Axum
//! server lifecycle.

use crate::application::services::{ArtworkService, CollectionService, GalleryService};
use crate::config::Config;
use crate::infrastructure::cache::{CachePolicy, CacheStore, NullStore, RedisStore};
use crate::infrastructure::persistence::{
    PgArtworkRepository, PgCollectionRepository, PgGalleryRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Redis cache store (or NullStore fallback)
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to migrate");

    let store: Arc<dyn CacheStore> = if let Some(redis_url) = &config.redis_url {
        let op_timeout = Duration::from_millis(config.cache_op_timeout_ms);
        match RedisStore::connect(redis_url, op_timeout).await {
            Ok(redis) => {
                tracing::info!("Cache enabled (Redis)");
                Arc::new(redis)
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using NullStore.", e);
                Arc::new(NullStore::new())
            }
        }
    } else {
        tracing::info!("Cache disabled (NullStore)");
        Arc::new(NullStore::new())
    };

    let cache = CachePolicy::new(store, config.cache_ttl_seconds);

    let pool = Arc::new(pool);
    let artwork_repository = Arc::new(PgArtworkRepository::new(pool.clone()));
    let gallery_repository = Arc::new(PgGalleryRepository::new(pool.clone()));
    let collection_repository = Arc::new(PgCollectionRepository::new(pool.clone()));

    let state = AppState {
        artwork_service: Arc::new(ArtworkService::new(
            artwork_repository,
            gallery_repository.clone(),
        )),
        gallery_service: Arc::new(GalleryService::new(gallery_repository)),
        collection_service: Arc::new(CollectionService::new(collection_repository)),
        cache,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
