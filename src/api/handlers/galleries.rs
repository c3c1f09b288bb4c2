//! Handlers for gallery endpoints.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use validator::Validate;

use crate::api::dto::gallery::CreateGalleryRequest;
use crate::domain::entities::Gallery;
use crate::error::AppError;
use crate::infrastructure::cache::keys;
use crate::state::AppState;
use crate::utils::extract_user::extract_user_id_from_headers;

/// Lists the caller's galleries.
///
/// # Endpoint
///
/// `GET /api/galleries`
///
/// # Cache
///
/// Read-through on `galleries:{user_id}`.
pub async fn list_galleries_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Gallery>>, AppError> {
    let user_id = extract_user_id_from_headers(&headers)?;
    let cache_key = keys::user_galleries(&user_id);

    let galleries = state
        .cache
        .read_through(&cache_key, || async {
            state.gallery_service.list_for_user(&user_id).await
        })
        .await?;

    Ok(Json(galleries))
}

/// Creates a gallery for the caller.
///
/// # Endpoint
///
/// `POST /api/galleries`
///
/// # Cache
///
/// Invalidates the caller's cached gallery listing after the insert
/// commits; a failed invalidation is logged and the response still
/// succeeds.
pub async fn create_gallery_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateGalleryRequest>,
) -> Result<(StatusCode, Json<Gallery>), AppError> {
    payload.validate()?;

    let user_id = extract_user_id_from_headers(&headers)?;

    let gallery = state
        .gallery_service
        .create_gallery(user_id.clone(), payload.name, payload.description)
        .await?;

    let cache_key = keys::user_galleries(&user_id);
    if let Err(e) = state.cache.invalidate_key(&cache_key).await {
        tracing::warn!(error = %e, cache_key, "Failed to invalidate gallery listing after create");
    }

    Ok((StatusCode::CREATED, Json(gallery)))
}
