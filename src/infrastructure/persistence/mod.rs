//! PostgreSQL repository implementations.

mod pg_artwork_repository;
mod pg_collection_repository;
mod pg_gallery_repository;

pub use pg_artwork_repository::PgArtworkRepository;
pub use pg_collection_repository::PgCollectionRepository;
pub use pg_gallery_repository::PgGalleryRepository;
