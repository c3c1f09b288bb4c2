//! Artwork entity and related value types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A piece of artwork shared on the platform.
///
/// The image itself lives in external storage; the entity carries its URL.
/// Entities serialize to JSON because listing results are cached verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub user_id: String,
    pub gallery_id: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Artwork {
    /// Returns true if the artwork is attached to a gallery.
    pub fn in_gallery(&self) -> bool {
        self.gallery_id.is_some()
    }
}

/// Input data for creating a new artwork.
#[derive(Debug, Clone)]
pub struct NewArtwork {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub user_id: String,
    pub gallery_id: Option<String>,
    pub tags: Vec<String>,
}

/// Partial update for an existing artwork.
///
/// `None` fields are left unchanged. `gallery_id: Some(None)` detaches the
/// artwork from its gallery; `Some(Some(id))` attaches it.
#[derive(Debug, Clone, Default)]
pub struct ArtworkPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub gallery_id: Option<Option<String>>,
    pub tags: Option<Vec<String>>,
}

/// Filters applied to paginated artwork listings.
///
/// All fields are optional; `None` means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ArtworkFilters {
    pub gallery_id: Option<String>,
    pub user_id: Option<String>,
    pub tag: Option<String>,
}

/// One page of artwork listing results.
///
/// This is the payload cached for listing requests, so its shape is stable
/// and fully serializable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtworkPage {
    pub artworks: Vec<Artwork>,
    pub total: i64,
    pub pages: i64,
    pub page: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_artwork(gallery_id: Option<&str>) -> Artwork {
        Artwork {
            id: "a1".to_string(),
            title: "Dunes".to_string(),
            description: None,
            image_url: "https://cdn.example.com/dunes.png".to_string(),
            user_id: "u1".to_string(),
            gallery_id: gallery_id.map(String::from),
            tags: vec!["landscape".to_string()],
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_in_gallery() {
        assert!(sample_artwork(Some("g1")).in_gallery());
        assert!(!sample_artwork(None).in_gallery());
    }

    #[test]
    fn test_artwork_json_round_trip() {
        let artwork = sample_artwork(Some("g1"));
        let encoded = serde_json::to_string(&artwork).unwrap();
        let decoded: Artwork = serde_json::from_str(&encoded).unwrap();

        assert_eq!(artwork, decoded);
    }

    #[test]
    fn test_default_filters_are_unconstrained() {
        let filters = ArtworkFilters::default();
        assert!(filters.gallery_id.is_none());
        assert!(filters.user_id.is_none());
        assert!(filters.tag.is_none());
    }
}
