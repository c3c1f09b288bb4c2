//! DTOs for gallery endpoints.

use serde::Deserialize;
use validator::Validate;

/// Request to create a new gallery.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateGalleryRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(length(max = 1000))]
    pub description: Option<String>,
}
