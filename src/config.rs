//! Application configuration constants.

/// Number of prints in the series.
pub const TOTAL_PRINTS: u32 = 119;

/// Default directory holding the print images, relative to the working
/// directory. Files follow the `NNN.jpg` naming convention.
pub const DEFAULT_IMAGE_DIR: &str = "img/edo";

/// Longest edge of a decoded grid thumbnail, in pixels.
pub const THUMBNAIL_EDGE: u32 = 320;

/// Capacity of the decoded-thumbnail LRU cache. Holds a full season of
/// prints plus scroll overshoot.
pub const THUMBNAIL_CACHE_CAPACITY: usize = 160;

/// Capacity of the full-size viewer image LRU cache.
pub const VIEWER_CACHE_CAPACITY: usize = 8;
