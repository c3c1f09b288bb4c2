//! Handlers for artwork endpoints (list, get, create, update, delete).

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::artwork::{CreateArtworkRequest, UpdateArtworkRequest};
use crate::api::dto::listing::ListArtworksParams;
use crate::domain::entities::{Artwork, ArtworkPage, ArtworkPatch};
use crate::error::AppError;
use crate::infrastructure::cache::keys;
use crate::state::AppState;
use crate::utils::extract_user::extract_user_id_from_headers;
use crate::utils::tags::parse_tags;

/// Lists artworks with pagination and optional filters.
///
/// # Endpoint
///
/// `GET /api/artworks?page=1&page_size=10&gallery_id=&user_id=&tag=`
///
/// # Cache
///
/// Read-through on the listing key derived from page, page size, and a
/// digest of the filters. On a hit the database is not touched; on a miss
/// the page is computed, stored with the configured TTL, and returned.
///
/// # Errors
///
/// Returns 400 Bad Request for out-of-range pagination parameters.
pub async fn list_artworks_handler(
    State(state): State<AppState>,
    Query(params): Query<ListArtworksParams>,
) -> Result<Json<ArtworkPage>, AppError> {
    let (page, page_size) = params
        .validate_and_get()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let filters = params.filters();
    let cache_key = keys::artwork_listing(page, page_size, &filters);

    let listing = state
        .cache
        .read_through(&cache_key, || async {
            state
                .artwork_service
                .list_artworks(page, page_size, &filters)
                .await
        })
        .await?;

    Ok(Json(listing))
}

/// Fetches a single artwork by id.
///
/// # Endpoint
///
/// `GET /api/artworks/{id}`
///
/// # Cache
///
/// Read-through on `artwork:{id}`. A missing artwork is a 404 and is never
/// cached (no negative entries).
pub async fn get_artwork_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Artwork>, AppError> {
    let cache_key = keys::artwork(&id);

    let artwork = state
        .cache
        .read_through(&cache_key, || async {
            state.artwork_service.get_artwork(&id).await
        })
        .await?;

    Ok(Json(artwork))
}

/// Uploads a new artwork.
///
/// # Endpoint
///
/// `POST /api/artworks`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Dunes",
///   "description": "Evening light",   // optional
///   "image_url": "https://cdn.example.com/dunes.png",
///   "gallery_id": "g1",               // optional, must belong to the caller
///   "tags": "oil, landscape"          // optional, comma-separated
/// }
/// ```
///
/// # Cache
///
/// After the insert commits, every cached artwork listing is invalidated,
/// plus the caller's gallery listing when the artwork lands in a gallery.
/// Invalidation is part of the mutation's completion; if it fails the
/// mutation still succeeds and readers may see stale listings until TTL
/// expiry, which is logged as a warning.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails or the gallery is not the
/// caller's.
pub async fn create_artwork_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateArtworkRequest>,
) -> Result<(StatusCode, Json<Artwork>), AppError> {
    payload.validate()?;

    let user_id = extract_user_id_from_headers(&headers)?;

    let artwork = state
        .artwork_service
        .create_artwork(
            user_id.clone(),
            payload.title,
            payload.description,
            payload.image_url,
            payload.gallery_id,
            payload.tags,
        )
        .await?;

    if let Err(e) = state.cache.invalidate_namespace(keys::ARTWORKS).await {
        tracing::warn!(error = %e, "Failed to invalidate artwork listings after create");
    }

    if artwork.in_gallery() {
        let gallery_key = keys::user_galleries(&user_id);
        if let Err(e) = state.cache.invalidate_key(&gallery_key).await {
            tracing::warn!(error = %e, cache_key = gallery_key, "Failed to invalidate gallery listing after create");
        }
    }

    Ok((StatusCode::CREATED, Json(artwork)))
}

/// Partially updates an artwork.
///
/// # Endpoint
///
/// `PATCH /api/artworks/{id}`
///
/// # Request Body
///
/// All fields are optional. Only provided fields are changed; `null`
/// clears `description` or detaches `gallery_id`.
///
/// # Cache
///
/// Invalidates the single-item key and every cached listing, plus the
/// caller's gallery listing when a gallery is involved on either side of
/// the update.
///
/// # Errors
///
/// Returns 404 Not Found if the artwork doesn't exist or isn't the caller's.
pub async fn update_artwork_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateArtworkRequest>,
) -> Result<Json<Artwork>, AppError> {
    payload.validate()?;

    let user_id = extract_user_id_from_headers(&headers)?;
    let gallery_touched = payload.gallery_id.is_some();

    let patch = ArtworkPatch {
        title: payload.title,
        description: payload.description,
        gallery_id: payload.gallery_id,
        tags: match payload.tags.as_deref() {
            Some(raw) => Some(parse_tags(raw)?),
            None => None,
        },
    };

    let artwork = state
        .artwork_service
        .update_artwork(&id, &user_id, patch)
        .await?;

    invalidate_after_mutation(&state, &id, &user_id, gallery_touched || artwork.in_gallery()).await;

    Ok(Json(artwork))
}

/// Deletes an artwork.
///
/// # Endpoint
///
/// `DELETE /api/artworks/{id}`
///
/// # Cache
///
/// Invalidates the single-item key and every cached listing, plus the
/// caller's gallery listing when the artwork was in a gallery.
///
/// # Errors
///
/// Returns 404 Not Found if the artwork doesn't exist or isn't the caller's.
pub async fn delete_artwork_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, AppError> {
    let user_id = extract_user_id_from_headers(&headers)?;

    let artwork = state.artwork_service.delete_artwork(&id, &user_id).await?;

    invalidate_after_mutation(&state, &id, &user_id, artwork.in_gallery()).await;

    Ok(StatusCode::NO_CONTENT)
}

/// Clears the caches an artwork mutation touches: the single-item key, the
/// listing namespace, and optionally the owner's gallery listing.
///
/// Failures are logged and swallowed; the mutation has already committed
/// and stale entries age out with the TTL.
async fn invalidate_after_mutation(
    state: &AppState,
    artwork_id: &str,
    user_id: &str,
    gallery_touched: bool,
) {
    let item_key = keys::artwork(artwork_id);
    if let Err(e) = state.cache.invalidate_key(&item_key).await {
        tracing::warn!(error = %e, cache_key = item_key, "Failed to invalidate artwork after mutation");
    }

    if let Err(e) = state.cache.invalidate_namespace(keys::ARTWORKS).await {
        tracing::warn!(error = %e, "Failed to invalidate artwork listings after mutation");
    }

    if gallery_touched {
        let gallery_key = keys::user_galleries(user_id);
        if let Err(e) = state.cache.invalidate_key(&gallery_key).await {
            tracing::warn!(error = %e, cache_key = gallery_key, "Failed to invalidate gallery listing after mutation");
        }
    }
}
