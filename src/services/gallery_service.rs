//! Service for gallery rendering and fullscreen viewer operations.
//!
//! Owns the locking around [`GalleryState`] and the shuffle source, and
//! hands the UI layer plain snapshot values so no lock is ever held while
//! touching Slint properties.

use crate::state::GalleryState;
use crate::state::gallery::{CardViewModel, Filter, Sort, viewer_label};
use log::warn;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Everything the UI needs to redraw the grid after a render.
#[derive(Debug, Clone)]
pub struct GallerySnapshot {
    pub status_line: String,
    pub filter_tag: &'static str,
    pub sort_tag: &'static str,
    pub cards: Vec<CardViewModel>,
}

/// Everything the UI needs to refresh the fullscreen viewer.
#[derive(Debug, Clone)]
pub struct ViewerSnapshot {
    pub label: String,
    pub src: PathBuf,
    pub alt: String,
    /// Adjacent images to warm up, best effort.
    pub prefetch: Vec<PathBuf>,
}

/// Service for gallery state transitions.
#[derive(Clone)]
pub struct GalleryService {
    gallery: Arc<Mutex<GalleryState>>,
    rng: Arc<Mutex<StdRng>>,
}

impl GalleryService {
    pub fn new(gallery: Arc<Mutex<GalleryState>>, rng: Arc<Mutex<StdRng>>) -> Self {
        Self { gallery, rng }
    }

    /// Recomputes the visible list and returns a fresh grid snapshot.
    /// A random sort reshuffles on every call.
    pub fn render(&self) -> GallerySnapshot {
        let mut rng = self.rng.lock().unwrap();
        let mut gallery = self.gallery.lock().unwrap();
        gallery.apply_filter_sort(&mut *rng);
        GallerySnapshot {
            status_line: gallery.status_line(),
            filter_tag: gallery.filter().tag(),
            sort_tag: gallery.sort().tag(),
            cards: gallery.visible_cards(),
        }
    }

    /// Switches the filter and re-renders. Unknown tags are ignored.
    pub fn select_filter(&self, tag: &str) -> Option<GallerySnapshot> {
        let Some(filter) = Filter::from_tag(tag) else {
            warn!("ignoring unknown filter tag: {:?}", tag);
            return None;
        };
        self.gallery.lock().unwrap().set_filter(filter);
        Some(self.render())
    }

    /// Switches the sort and re-renders. Unknown tags are ignored.
    pub fn select_sort(&self, tag: &str) -> Option<GallerySnapshot> {
        let Some(sort) = Sort::from_tag(tag) else {
            warn!("ignoring unknown sort tag: {:?}", tag);
            return None;
        };
        self.gallery.lock().unwrap().set_sort(sort);
        Some(self.render())
    }

    /// Opens the viewer at a position in the visible list.
    pub fn open_viewer(&self, visible_index: usize) -> Option<ViewerSnapshot> {
        let mut gallery = self.gallery.lock().unwrap();
        gallery.open_viewer(visible_index);
        Self::viewer_snapshot(&mut gallery)
    }

    /// Moves the viewer forward one image, clamped at the end.
    pub fn viewer_next(&self) -> Option<ViewerSnapshot> {
        let mut gallery = self.gallery.lock().unwrap();
        gallery.viewer_next();
        Self::viewer_snapshot(&mut gallery)
    }

    /// Moves the viewer back one image, clamped at the start.
    pub fn viewer_prev(&self) -> Option<ViewerSnapshot> {
        let mut gallery = self.gallery.lock().unwrap();
        gallery.viewer_prev();
        Self::viewer_snapshot(&mut gallery)
    }

    /// Closes the viewer, keeping its position.
    pub fn close_viewer(&self) {
        self.gallery.lock().unwrap().close_viewer();
    }

    pub fn viewer_open(&self) -> bool {
        self.gallery.lock().unwrap().viewer_open()
    }

    fn viewer_snapshot(gallery: &mut GalleryState) -> Option<ViewerSnapshot> {
        let record = match gallery.viewer_record() {
            Some(record) => record.clone(),
            None => {
                warn!("viewer refresh requested with an empty visible list");
                return None;
            }
        };
        let (prev, next) = gallery.viewer_neighbors();
        let prefetch = [prev, next]
            .into_iter()
            .flatten()
            .map(|r| r.src.clone())
            .collect();
        Some(ViewerSnapshot {
            label: viewer_label(&record),
            src: record.src,
            alt: record.alt,
            prefetch,
        })
    }
}
