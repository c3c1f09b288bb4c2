//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`ArtworkRepository`] - Artwork CRUD with tags and filtered pagination
//! - [`GalleryRepository`] - Gallery management
//! - [`CollectionRepository`] - Collection management

pub mod artwork_repository;
pub mod collection_repository;
pub mod gallery_repository;

pub use artwork_repository::ArtworkRepository;
pub use collection_repository::CollectionRepository;
pub use gallery_repository::GalleryRepository;

#[cfg(test)]
pub use artwork_repository::MockArtworkRepository;
#[cfg(test)]
pub use collection_repository::MockCollectionRepository;
#[cfg(test)]
pub use gallery_repository::MockGalleryRepository;
