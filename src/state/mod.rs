//! State management for the gallery application.

use crate::catalog::build_catalog;
use crate::config::{THUMBNAIL_CACHE_CAPACITY, VIEWER_CACHE_CAPACITY};
use crate::image_cache::ImageCache;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

pub mod gallery;
pub mod keys;
pub mod lightbox;

pub use gallery::GalleryState;
pub use lightbox::LightboxState;

/// Application-wide state container.
pub struct AppState {
    /// Directory the print images live in.
    pub image_dir: PathBuf,
    pub gallery: Arc<Mutex<GalleryState>>,
    pub lightbox: Arc<Mutex<LightboxState>>,
    /// Whether the about dialog is showing.
    pub about_open: Arc<Mutex<bool>>,
    /// LRU cache for decoded grid thumbnails.
    pub thumbnail_cache: Arc<Mutex<ImageCache>>,
    /// LRU cache for decoded full-size viewer images.
    pub viewer_cache: Arc<Mutex<ImageCache>>,
    /// Shuffle source for the random sort. Seeded from the OS at startup;
    /// tests inject their own seeded generators instead.
    pub rng: Arc<Mutex<StdRng>>,
}

impl AppState {
    pub fn new(image_dir: &Path) -> Self {
        Self {
            image_dir: image_dir.to_path_buf(),
            gallery: Arc::new(Mutex::new(GalleryState::new(build_catalog(image_dir)))),
            lightbox: Arc::new(Mutex::new(LightboxState::new())),
            about_open: Arc::new(Mutex::new(false)),
            thumbnail_cache: Arc::new(Mutex::new(ImageCache::new(THUMBNAIL_CACHE_CAPACITY))),
            viewer_cache: Arc::new(Mutex::new(ImageCache::new(VIEWER_CACHE_CAPACITY))),
            rng: Arc::new(Mutex::new(StdRng::from_os_rng())),
        }
    }
}
