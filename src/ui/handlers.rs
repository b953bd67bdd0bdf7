//! Event handlers for UI callbacks.
//!
//! Wires every `Logic` callback (filter/sort selection, card clicks, viewer
//! navigation, about dialog, lightbox, keyboard dispatch) to the service
//! layer, then pushes the resulting snapshots into the adapters.

use crate::image_cache::ImageCache;
use crate::services::lightbox_service::credit_triggers;
use crate::services::{GalleryService, LightboxService};
use crate::state::AppState;
use crate::state::keys::{self, Key, KeyAction, Layers};
use crate::ui::image_display;
use slint::ComponentHandle;
use std::sync::{Arc, Mutex};

/// Recomputes the visible list and redraws the grid and status line.
pub fn render_gallery(
    ui: &crate::AppWindow,
    service: &GalleryService,
    cache: &Arc<Mutex<ImageCache>>,
) {
    let snapshot = service.render();
    super::set_gallery_info(ui, &snapshot.status_line, snapshot.filter_tag, snapshot.sort_tag);
    image_display::show_cards(ui, snapshot.cards, cache.clone());
}

/// Sets up all UI event handlers for the application.
pub fn setup_handlers(ui: &crate::AppWindow, app_state: &AppState) {
    let gallery = GalleryService::new(app_state.gallery.clone(), app_state.rng.clone());
    let lightbox = LightboxService::new(
        app_state.lightbox.clone(),
        credit_triggers(&app_state.image_dir),
    );
    let about_open = app_state.about_open.clone();
    let thumbnail_cache = app_state.thumbnail_cache.clone();
    let viewer_cache = app_state.viewer_cache.clone();
    let logic = ui.global::<crate::Logic>();

    logic.on_filter_selected({
        let ui_handle = ui.as_weak();
        let gallery = gallery.clone();
        let cache = thumbnail_cache.clone();
        move |tag| {
            let Some(ui) = ui_handle.upgrade() else { return };
            if let Some(snapshot) = gallery.select_filter(tag.as_str()) {
                super::set_gallery_info(
                    &ui,
                    &snapshot.status_line,
                    snapshot.filter_tag,
                    snapshot.sort_tag,
                );
                image_display::show_cards(&ui, snapshot.cards, cache.clone());
            }
        }
    });

    logic.on_sort_selected({
        let ui_handle = ui.as_weak();
        let gallery = gallery.clone();
        let cache = thumbnail_cache.clone();
        move |tag| {
            let Some(ui) = ui_handle.upgrade() else { return };
            if let Some(snapshot) = gallery.select_sort(tag.as_str()) {
                super::set_gallery_info(
                    &ui,
                    &snapshot.status_line,
                    snapshot.filter_tag,
                    snapshot.sort_tag,
                );
                image_display::show_cards(&ui, snapshot.cards, cache.clone());
            }
        }
    });

    logic.on_card_clicked({
        let ui_handle = ui.as_weak();
        let gallery = gallery.clone();
        let cache = viewer_cache.clone();
        move |visible_index| {
            let Some(ui) = ui_handle.upgrade() else { return };
            if visible_index < 0 {
                return;
            }
            if let Some(snapshot) = gallery.open_viewer(visible_index as usize) {
                image_display::show_viewer(&ui, snapshot, cache.clone());
            }
        }
    });

    logic.on_viewer_next({
        let ui_handle = ui.as_weak();
        let gallery = gallery.clone();
        let cache = viewer_cache.clone();
        move || {
            let Some(ui) = ui_handle.upgrade() else { return };
            if let Some(snapshot) = gallery.viewer_next() {
                image_display::show_viewer(&ui, snapshot, cache.clone());
            }
        }
    });

    logic.on_viewer_prev({
        let ui_handle = ui.as_weak();
        let gallery = gallery.clone();
        let cache = viewer_cache.clone();
        move || {
            let Some(ui) = ui_handle.upgrade() else { return };
            if let Some(snapshot) = gallery.viewer_prev() {
                image_display::show_viewer(&ui, snapshot, cache.clone());
            }
        }
    });

    logic.on_viewer_closed({
        let ui_handle = ui.as_weak();
        let gallery = gallery.clone();
        move || {
            let Some(ui) = ui_handle.upgrade() else { return };
            gallery.close_viewer();
            super::close_viewer(&ui);
        }
    });

    logic.on_about_opened({
        let ui_handle = ui.as_weak();
        let about_open = about_open.clone();
        move || {
            let Some(ui) = ui_handle.upgrade() else { return };
            *about_open.lock().unwrap() = true;
            super::set_about_open(&ui, true);
        }
    });

    logic.on_about_closed({
        let ui_handle = ui.as_weak();
        let about_open = about_open.clone();
        move || {
            let Some(ui) = ui_handle.upgrade() else { return };
            *about_open.lock().unwrap() = false;
            super::set_about_open(&ui, false);
        }
    });

    logic.on_lightbox_opened({
        let ui_handle = ui.as_weak();
        let lightbox = lightbox.clone();
        move |trigger_index| {
            let Some(ui) = ui_handle.upgrade() else { return };
            if trigger_index < 0 {
                return;
            }
            if let Some(snapshot) = lightbox.open_trigger(trigger_index as usize) {
                image_display::show_lightbox(&ui, snapshot);
            }
        }
    });

    logic.on_lightbox_closed({
        let ui_handle = ui.as_weak();
        let lightbox = lightbox.clone();
        move || {
            let Some(ui) = ui_handle.upgrade() else { return };
            lightbox.close();
            super::close_lightbox(&ui);
        }
    });

    logic.on_key_pressed({
        let ui_handle = ui.as_weak();
        let gallery = gallery.clone();
        let lightbox = lightbox.clone();
        let about_open = about_open.clone();
        let cache = viewer_cache.clone();
        move |tag| {
            let Some(ui) = ui_handle.upgrade() else { return false };
            let Some(key) = Key::from_tag(tag.as_str()) else {
                return false;
            };
            let layers = Layers {
                viewer_open: gallery.viewer_open(),
                about_open: *about_open.lock().unwrap(),
                lightbox_open: lightbox.is_open(),
            };
            let Some(action) = keys::dispatch(key, layers) else {
                return false;
            };
            match action {
                KeyAction::ViewerClose => {
                    gallery.close_viewer();
                    super::close_viewer(&ui);
                }
                KeyAction::ViewerNext => {
                    if let Some(snapshot) = gallery.viewer_next() {
                        image_display::show_viewer(&ui, snapshot, cache.clone());
                    }
                }
                KeyAction::ViewerPrev => {
                    if let Some(snapshot) = gallery.viewer_prev() {
                        image_display::show_viewer(&ui, snapshot, cache.clone());
                    }
                }
                KeyAction::AboutClose => {
                    *about_open.lock().unwrap() = false;
                    super::set_about_open(&ui, false);
                }
                KeyAction::LightboxClose => {
                    lightbox.close();
                    super::close_lightbox(&ui);
                }
            }
            true
        }
    });
}
