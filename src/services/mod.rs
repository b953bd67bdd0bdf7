//! Service layer for business logic.
//!
//! Separates state transitions from UI handlers so both stay testable
//! without a rendering backend.

pub mod gallery_service;
pub mod lightbox_service;

pub use gallery_service::GalleryService;
pub use lightbox_service::LightboxService;
