//! Decoded-image cache for fast re-renders and viewer navigation.
//!
//! Stores raw RGB8 pixel data keyed by file path with an LRU policy.
//! One instance backs the grid thumbnails, another the fullscreen viewer.

use log::debug;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Decoded RGB8 pixel data plus dimensions.
#[derive(Clone)]
pub struct CachedImage {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl CachedImage {
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            data,
            width,
            height,
        }
    }
}

/// LRU cache of decoded images.
pub struct ImageCache {
    cache: LruCache<PathBuf, CachedImage>,
}

impl ImageCache {
    /// Creates a cache holding up to `capacity` decoded images.
    pub fn new(capacity: usize) -> Self {
        Self {
            cache: LruCache::new(NonZeroUsize::new(capacity).expect("Capacity must be non-zero")),
        }
    }

    /// Retrieves an image from the cache if it exists.
    pub fn get(&mut self, path: &Path) -> Option<CachedImage> {
        let result = self.cache.get(path).cloned();
        if result.is_some() {
            debug!("cache hit: {}", path.display());
        } else {
            debug!("cache miss: {}", path.display());
        }
        result
    }

    /// Stores an image in the cache, evicting the least recently used
    /// entry when full.
    pub fn put(&mut self, path: PathBuf, image: CachedImage) {
        debug!(
            "cache put: {} ({}x{})",
            path.display(),
            image.width,
            image.height
        );
        self.cache.put(path, image);
    }

    /// Checks whether an image is cached without decoding anything.
    pub fn contains(&mut self, path: &Path) -> bool {
        self.cache.contains(path)
    }
}
