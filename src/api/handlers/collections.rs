//! Handlers for collection endpoints.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use validator::Validate;

use crate::api::dto::collection::CreateCollectionRequest;
use crate::domain::entities::Collection;
use crate::error::AppError;
use crate::infrastructure::cache::keys;
use crate::state::AppState;
use crate::utils::extract_user::extract_user_id_from_headers;

/// Lists the caller's collections.
///
/// # Endpoint
///
/// `GET /api/collections`
///
/// # Cache
///
/// Read-through on `collections:{user_id}`.
pub async fn list_collections_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Collection>>, AppError> {
    let user_id = extract_user_id_from_headers(&headers)?;
    let cache_key = keys::user_collections(&user_id);

    let collections = state
        .cache
        .read_through(&cache_key, || async {
            state.collection_service.list_for_user(&user_id).await
        })
        .await?;

    Ok(Json(collections))
}

/// Creates a collection for the caller.
///
/// # Endpoint
///
/// `POST /api/collections`
///
/// # Cache
///
/// Invalidates the caller's cached collection listing after the insert
/// commits.
pub async fn create_collection_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateCollectionRequest>,
) -> Result<(StatusCode, Json<Collection>), AppError> {
    payload.validate()?;

    let user_id = extract_user_id_from_headers(&headers)?;

    let collection = state
        .collection_service
        .create_collection(user_id.clone(), payload.name)
        .await?;

    let cache_key = keys::user_collections(&user_id);
    if let Err(e) = state.cache.invalidate_key(&cache_key).await {
        tracing::warn!(error = %e, cache_key, "Failed to invalidate collection listing after create");
    }

    Ok((StatusCode::CREATED, Json(collection)))
}
