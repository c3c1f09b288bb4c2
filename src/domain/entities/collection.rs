//! Collection entity: a user-curated set of saved artworks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named collection belonging to one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    pub name: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new collection.
#[derive(Debug, Clone)]
pub struct NewCollection {
    pub id: String,
    pub name: String,
    pub user_id: String,
}
