//! API route configuration.
//!
//! Browse and mutation routes carry different rate limit buckets: browsing
//! is frequent and cache-served, mutations are rare and hit the database.

use crate::api::handlers::{
    create_artwork_handler, create_collection_handler, create_gallery_handler,
    delete_artwork_handler, get_artwork_handler, list_artworks_handler, list_collections_handler,
    list_galleries_handler, update_artwork_handler,
};
use crate::api::middleware::rate_limit;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `GET    /artworks`        - Paginated artwork listing (cached)
/// - `POST   /artworks`        - Upload an artwork
/// - `GET    /artworks/{id}`   - Fetch a single artwork (cached)
/// - `PATCH  /artworks/{id}`   - Partially update an artwork
/// - `DELETE /artworks/{id}`   - Delete an artwork
/// - `GET    /galleries`       - Caller's galleries (cached)
/// - `POST   /galleries`       - Create a gallery
/// - `GET    /collections`     - Caller's collections (cached)
/// - `POST   /collections`     - Create a collection
pub fn routes() -> Router<AppState> {
    let browse = Router::new()
        .route("/artworks", get(list_artworks_handler))
        .route("/artworks/{id}", get(get_artwork_handler))
        .route("/galleries", get(list_galleries_handler))
        .route("/collections", get(list_collections_handler))
        .layer(rate_limit::layer());

    let mutate = Router::new()
        .route("/artworks", post(create_artwork_handler))
        .route(
            "/artworks/{id}",
            patch(update_artwork_handler).delete(delete_artwork_handler),
        )
        .route("/galleries", post(create_gallery_handler))
        .route("/collections", post(create_collection_handler))
        .layer(rate_limit::secure_layer());

    Router::new().merge(browse).merge(mutate)
}
