//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. They derive
//! Serde traits because listing results are cached as JSON payloads.
//!
//! # Entity Types
//!
//! - [`Artwork`] - A shared piece of artwork with its tags
//! - [`Gallery`] - A user-owned grouping of artworks
//! - [`Collection`] - A user-curated set of saved artworks
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! `NewArtwork`, `NewGallery`, `NewCollection` - and `ArtworkPatch` for
//! partial updates.

pub mod artwork;
pub mod collection;
pub mod gallery;

pub use artwork::{Artwork, ArtworkFilters, ArtworkPage, ArtworkPatch, NewArtwork};
pub use collection::{Collection, NewCollection};
pub use gallery::{Gallery, NewGallery};
