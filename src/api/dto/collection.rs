//! DTOs for collection endpoints.

use serde::Deserialize;
use validator::Validate;

/// Request to create a new collection.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCollectionRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,
}
