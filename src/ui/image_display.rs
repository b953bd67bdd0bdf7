//! Background decode and display of prints.
//!
//! Decoding runs on rayon worker threads; only raw RGB8 data crosses back
//! to the UI thread via `slint::invoke_from_event_loop`, where it becomes
//! a `slint::Image`. Grid thumbnails patch their row when they arrive; a
//! result for a row that has been re-rendered in the meantime is dropped
//! instead of patching the wrong card.

use crate::config::THUMBNAIL_EDGE;
use crate::image_cache::{CachedImage, ImageCache};
use crate::image_loader;
use crate::services::gallery_service::ViewerSnapshot;
use crate::services::lightbox_service::LightboxSnapshot;
use crate::state::gallery::CardViewModel;
use crate::state::lightbox::LightboxTrigger;
use log::debug;
use slint::{ComponentHandle, Model, ModelRc, VecModel};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

fn card_row(card: &CardViewModel, cached: Option<CachedImage>) -> crate::CardData {
    let (thumbnail, has_thumbnail) = match cached {
        Some(img) => (
            image_loader::create_slint_image(img.data, img.width, img.height),
            true,
        ),
        None => (slint::Image::default(), false),
    };
    crate::CardData {
        print_id: card.id_label.as_str().into(),
        season_label: card.season_label.into(),
        alt: card.alt.as_str().into(),
        thumbnail,
        has_thumbnail,
    }
}

/// Replaces the grid with one card per visible item, in visible order.
///
/// Cached thumbnails show immediately; the rest start as placeholder tiles
/// and fill in as their background decodes finish.
pub fn show_cards(
    ui: &crate::AppWindow,
    cards: Vec<CardViewModel>,
    cache: Arc<Mutex<ImageCache>>,
) {
    let rows: Vec<crate::CardData> = cards
        .iter()
        .map(|card| {
            let cached = cache.lock().ok().and_then(|mut c| c.get(&card.src));
            card_row(card, cached)
        })
        .collect();
    let pending: Vec<(usize, CardViewModel)> = cards
        .into_iter()
        .enumerate()
        .filter(|(row, _)| !rows[*row].has_thumbnail)
        .collect();

    ui.global::<crate::GalleryAdapter>()
        .set_cards(ModelRc::new(VecModel::from(rows)));

    let ui_weak = ui.as_weak();
    for (row, card) in pending {
        spawn_thumbnail_decode(ui_weak.clone(), row, card, cache.clone());
    }
}

fn spawn_thumbnail_decode(
    ui: slint::Weak<crate::AppWindow>,
    row: usize,
    card: CardViewModel,
    cache: Arc<Mutex<ImageCache>>,
) {
    rayon::spawn(move || {
        let result = image_loader::load_thumbnail_blocking(&card.src, THUMBNAIL_EDGE);
        let _ = slint::invoke_from_event_loop(move || {
            let Some(ui) = ui.upgrade() else { return };
            match result {
                Ok((data, width, height)) => {
                    if let Ok(mut cache) = cache.lock() {
                        cache.put(card.src.clone(), CachedImage::new(data.clone(), width, height));
                    }
                    patch_card_row(&ui, row, &card.id_label, data, width, height);
                }
                Err(e) => {
                    // A card without a decodable file keeps its placeholder
                    // tile; the grid itself is not an error surface.
                    debug!("thumbnail decode failed for {}: {}", card.src.display(), e);
                }
            }
        });
    });
}

fn patch_card_row(
    ui: &crate::AppWindow,
    row: usize,
    id_label: &str,
    data: Vec<u8>,
    width: u32,
    height: u32,
) {
    let cards = ui.global::<crate::GalleryAdapter>().get_cards();
    let Some(mut row_data) = cards.row_data(row) else {
        return;
    };
    if row_data.print_id.as_str() != id_label {
        debug!("dropping stale thumbnail for {}", id_label);
        return;
    }
    row_data.thumbnail = image_loader::create_slint_image(data, width, height);
    row_data.has_thumbnail = true;
    cards.set_row_data(row, row_data);
}

/// Shows a viewer snapshot: label immediately, the print from cache or a
/// background decode, then best-effort warming of the neighbors.
pub fn show_viewer(ui: &crate::AppWindow, snapshot: ViewerSnapshot, cache: Arc<Mutex<ImageCache>>) {
    super::set_viewer_info(ui, &snapshot.label);

    let cached = cache.lock().ok().and_then(|mut c| c.get(&snapshot.src));
    if let Some(img) = cached {
        ui.global::<crate::GalleryAdapter>().set_viewer_image(
            image_loader::create_slint_image(img.data, img.width, img.height),
        );
        prefetch_images(snapshot.prefetch, cache);
        return;
    }

    let ui_weak = ui.as_weak();
    let src = snapshot.src.clone();
    let label = snapshot.label.clone();
    let cache_for_decode = cache.clone();
    rayon::spawn(move || {
        let result = image_loader::load_image_blocking(&src);
        let _ = slint::invoke_from_event_loop(move || {
            let Some(ui) = ui_weak.upgrade() else { return };
            match result {
                Ok((data, width, height)) => {
                    if let Ok(mut cache) = cache_for_decode.lock() {
                        cache.put(src.clone(), CachedImage::new(data.clone(), width, height));
                    }
                    let adapter = ui.global::<crate::GalleryAdapter>();
                    // The user may have navigated on while this decoded.
                    if adapter.get_viewer_label().as_str() == label.as_str() {
                        adapter.set_viewer_image(image_loader::create_slint_image(
                            data, width, height,
                        ));
                    }
                }
                Err(e) => super::set_error_with_prefix(&ui, "Failed to load print", e.to_string()),
            }
        });
    });

    prefetch_images(snapshot.prefetch, cache);
}

/// Warms the cache with the prints adjacent to the viewer position so
/// prev/next feels instant. Failures are silently ignored.
pub fn prefetch_images(paths: Vec<PathBuf>, cache: Arc<Mutex<ImageCache>>) {
    for path in paths {
        let should_load = cache
            .lock()
            .ok()
            .map(|mut c| !c.contains(&path))
            .unwrap_or(false);
        if !should_load {
            continue;
        }
        let cache = cache.clone();
        rayon::spawn(move || {
            if let Ok((data, width, height)) = image_loader::load_image_blocking(&path) {
                if let Ok(mut cache) = cache.lock() {
                    cache.put(path, CachedImage::new(data, width, height));
                }
            }
        });
    }
}

/// Opens the lightbox overlay and decodes its enlarged image in the
/// background.
pub fn show_lightbox(ui: &crate::AppWindow, snapshot: LightboxSnapshot) {
    super::set_lightbox_info(ui, &snapshot.alt, &snapshot.caption);

    let ui_weak = ui.as_weak();
    rayon::spawn(move || {
        let result = image_loader::load_image_blocking(&snapshot.src);
        let _ = slint::invoke_from_event_loop(move || {
            let Some(ui) = ui_weak.upgrade() else { return };
            let adapter = ui.global::<crate::LightboxAdapter>();
            if !adapter.get_open() {
                return;
            }
            match result {
                Ok((data, width, height)) => {
                    adapter.set_full_image(image_loader::create_slint_image(data, width, height));
                }
                Err(e) => {
                    // The overlay stays up with its caption; the missing
                    // image is the only symptom.
                    debug!("lightbox decode failed for {}: {}", snapshot.src.display(), e);
                }
            }
        });
    });
}

/// Populates the about dialog's credit plates, decoding each thumbnail in
/// the background.
pub fn show_credits(ui: &crate::AppWindow, triggers: &[LightboxTrigger]) {
    let rows: Vec<crate::CreditData> = triggers
        .iter()
        .map(|trigger| crate::CreditData {
            thumbnail: slint::Image::default(),
            alt: trigger.alt.as_str().into(),
            has_thumbnail: false,
        })
        .collect();
    ui.global::<crate::LightboxAdapter>()
        .set_credits(ModelRc::new(VecModel::from(rows)));

    for (row, trigger) in triggers.iter().enumerate() {
        let ui_weak = ui.as_weak();
        let src = trigger.thumb_src.clone();
        rayon::spawn(move || {
            let result = image_loader::load_thumbnail_blocking(&src, THUMBNAIL_EDGE);
            let _ = slint::invoke_from_event_loop(move || {
                let Some(ui) = ui_weak.upgrade() else { return };
                let Ok((data, width, height)) = result else {
                    return;
                };
                let credits = ui.global::<crate::LightboxAdapter>().get_credits();
                if let Some(mut credit) = credits.row_data(row) {
                    credit.thumbnail = image_loader::create_slint_image(data, width, height);
                    credit.has_thumbnail = true;
                    credits.set_row_data(row, credit);
                }
            });
        });
    }
}
