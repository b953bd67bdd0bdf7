//! Helper functions that set groups of adapter properties together.
//!
//! The open/visibility flags and their content always move as a pair, so
//! handlers call these instead of poking individual setters.

use log::error;
use slint::ComponentHandle;

/// Sets the grid header state: status line plus the active filter/sort
/// tags the navigation links highlight.
pub fn set_gallery_info(ui: &crate::AppWindow, status_line: &str, filter_tag: &str, sort_tag: &str) {
    let adapter = ui.global::<crate::GalleryAdapter>();
    adapter.set_status_line(status_line.into());
    adapter.set_current_filter(filter_tag.into());
    adapter.set_current_sort(sort_tag.into());
}

/// Opens the fullscreen viewer with its label; clears any stale error.
pub fn set_viewer_info(ui: &crate::AppWindow, label: &str) {
    let adapter = ui.global::<crate::GalleryAdapter>();
    adapter.set_viewer_label(label.into());
    adapter.set_error_message("".into());
    adapter.set_viewer_open(true);
}

/// Hides the fullscreen viewer. The viewer image is left in place; the
/// next open overwrites it.
pub fn close_viewer(ui: &crate::AppWindow) {
    ui.global::<crate::GalleryAdapter>().set_viewer_open(false);
}

pub fn set_about_open(ui: &crate::AppWindow, open: bool) {
    ui.global::<crate::GalleryAdapter>().set_about_open(open);
}

/// Opens the lightbox with its text content. The enlarged image arrives
/// separately once decoded.
pub fn set_lightbox_info(ui: &crate::AppWindow, alt: &str, caption: &str) {
    let adapter = ui.global::<crate::LightboxAdapter>();
    adapter.set_full_image(slint::Image::default());
    adapter.set_alt_text(alt.into());
    adapter.set_caption(caption.into());
    adapter.set_open(true);
}

/// Closes the lightbox and wipes its content, mirroring the state reset.
pub fn close_lightbox(ui: &crate::AppWindow) {
    let adapter = ui.global::<crate::LightboxAdapter>();
    adapter.set_open(false);
    adapter.set_full_image(slint::Image::default());
    adapter.set_alt_text("".into());
    adapter.set_caption("".into());
}

/// Logs an error and surfaces it in the viewer's message area.
pub fn set_error_with_prefix(ui: &crate::AppWindow, prefix: &str, error: String) {
    let error_message = format!("{}: {}", prefix, error);
    error!("{}", error_message);
    ui.global::<crate::GalleryAdapter>()
        .set_error_message(error_message.into());
}
