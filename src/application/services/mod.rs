//! Business logic services for the application layer.

pub mod artwork_service;
pub mod collection_service;
pub mod gallery_service;

pub use artwork_service::ArtworkService;
pub use collection_service::CollectionService;
pub use gallery_service::GalleryService;
