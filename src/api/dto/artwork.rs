//! DTOs for artwork endpoints.

use serde::Deserialize;
use validator::Validate;

/// Request to upload a new artwork.
///
/// The image itself is already in object storage; the request carries its
/// URL plus display metadata.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateArtworkRequest {
    #[validate(length(min = 2, max = 200))]
    pub title: String,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    /// Public URL of the uploaded image (must be valid HTTP/HTTPS).
    #[validate(url(message = "Invalid image URL"))]
    pub image_url: String,

    /// Optional gallery to attach the artwork to. Must belong to the uploader.
    pub gallery_id: Option<String>,

    /// Optional comma-separated tag list, e.g. `"oil, landscape"`.
    pub tags: Option<String>,
}

/// Partial update for an artwork.
///
/// All fields are optional; only provided fields are changed. For
/// `description` and `gallery_id`, sending `null` clears the field while
/// omitting it leaves it unchanged.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateArtworkRequest {
    #[validate(length(min = 2, max = 200))]
    pub title: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub gallery_id: Option<Option<String>>,

    /// Replaces the full tag list when provided.
    pub tags: Option<String>,
}
