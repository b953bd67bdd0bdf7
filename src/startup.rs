//! Startup wiring: image directory resolution and the initial render.

use crate::config::DEFAULT_IMAGE_DIR;
use crate::services::GalleryService;
use crate::services::lightbox_service::credit_triggers;
use crate::state::AppState;
use crate::ui;
use log::info;
use std::path::PathBuf;

/// The first non-flag CLI argument overrides the image directory.
pub fn image_dir_from_args() -> PathBuf {
    std::env::args_os()
        .skip(1)
        .map(PathBuf::from)
        .find(|arg| !arg.to_string_lossy().starts_with('-'))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_IMAGE_DIR))
}

/// Performs the initial render: default filter and sort, full grid, and
/// the about dialog's credit plates.
pub fn configure_startup(app: &crate::AppWindow, app_state: &AppState) {
    info!("serving prints from {}", app_state.image_dir.display());

    let gallery = GalleryService::new(app_state.gallery.clone(), app_state.rng.clone());
    ui::render_gallery(app, &gallery, &app_state.thumbnail_cache);
    ui::image_display::show_credits(app, &credit_triggers(&app_state.image_dir));
}
