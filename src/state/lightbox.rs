//! Generic lightbox overlay: click a thumbnail, see the enlarged image.
//!
//! Self-contained and independent of the gallery. The overlay holds no
//! history; every open overwrites the previous content and close wipes it.

use std::path::{Path, PathBuf};

/// A clickable thumbnail that opens the lightbox.
///
/// `full_src` is the optional explicit full-size source; when absent the
/// thumbnail's own source is enlarged. The caption falls back from the
/// explicit caption to the alt text to the empty string.
#[derive(Debug, Clone)]
pub struct LightboxTrigger {
    pub thumb_src: PathBuf,
    pub full_src: Option<PathBuf>,
    pub alt: String,
    pub caption: Option<String>,
}

impl LightboxTrigger {
    /// Resolves the content this trigger opens: `(src, alt, caption)`.
    pub fn resolve(&self) -> (PathBuf, String, String) {
        let src = self.full_src.clone().unwrap_or_else(|| self.thumb_src.clone());
        let caption = self
            .caption
            .clone()
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| self.alt.clone());
        (src, self.alt.clone(), caption)
    }
}

/// Current lightbox content. Empty and closed until a trigger fires.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LightboxState {
    src: PathBuf,
    alt: String,
    caption: String,
    open: bool,
}

impl LightboxState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the lightbox with the given content. A missing source is a
    /// no-op: the overlay stays closed rather than showing an empty frame.
    pub fn open(&mut self, src: &Path, alt: &str, caption: &str) {
        if src.as_os_str().is_empty() {
            return;
        }
        self.src = src.to_path_buf();
        self.alt = alt.to_string();
        self.caption = caption.to_string();
        self.open = true;
    }

    /// Closes the lightbox and clears its content. Safe to call when
    /// already closed.
    pub fn close(&mut self) {
        self.src.clear();
        self.alt.clear();
        self.caption.clear();
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn src(&self) -> &Path {
        &self.src
    }

    pub fn alt(&self) -> &str {
        &self.alt
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }
}
