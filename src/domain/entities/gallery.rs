//! Gallery entity: a user-owned grouping of artworks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named gallery belonging to one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gallery {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new gallery.
#[derive(Debug, Clone)]
pub struct NewGallery {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_json_round_trip() {
        let gallery = Gallery {
            id: "g1".to_string(),
            name: "Seascapes".to_string(),
            description: Some("Water, mostly".to_string()),
            user_id: "u1".to_string(),
            created_at: Utc::now(),
        };

        let encoded = serde_json::to_string(&gallery).unwrap();
        let decoded: Gallery = serde_json::from_str(&encoded).unwrap();

        assert_eq!(gallery, decoded);
    }
}
