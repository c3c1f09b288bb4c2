//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository
//! calls, validation, and business rules. Services consume repository traits
//! and provide a clean API for HTTP handlers. They are cache-unaware: the
//! read-through and invalidation flow lives in the handlers, so services can
//! be tested against mock repositories alone.
//!
//! # Available Services
//!
//! - [`services::artwork_service::ArtworkService`] - Artwork CRUD and listing
//! - [`services::gallery_service::GalleryService`] - Gallery management
//! - [`services::collection_service::CollectionService`] - Collection management

pub mod services;
