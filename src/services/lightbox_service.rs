//! Service for the generic lightbox overlay.
//!
//! Holds the trigger list and resolves a clicked trigger into lightbox
//! content. Independent of the gallery: nothing here reads gallery state.

use crate::state::LightboxState;
use crate::state::lightbox::LightboxTrigger;
use log::warn;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Resolved content for an open lightbox.
#[derive(Debug, Clone)]
pub struct LightboxSnapshot {
    pub src: PathBuf,
    pub alt: String,
    pub caption: String,
}

/// Service for lightbox open/close operations.
#[derive(Clone)]
pub struct LightboxService {
    lightbox: Arc<Mutex<LightboxState>>,
    triggers: Arc<Vec<LightboxTrigger>>,
}

impl LightboxService {
    pub fn new(lightbox: Arc<Mutex<LightboxState>>, triggers: Vec<LightboxTrigger>) -> Self {
        Self {
            lightbox,
            triggers: Arc::new(triggers),
        }
    }

    pub fn triggers(&self) -> &[LightboxTrigger] {
        &self.triggers
    }

    /// Opens the lightbox from a trigger. Returns `None` (and leaves the
    /// overlay closed) for an out-of-range trigger or an empty source.
    pub fn open_trigger(&self, index: usize) -> Option<LightboxSnapshot> {
        let Some(trigger) = self.triggers.get(index) else {
            warn!("ignoring unknown lightbox trigger index {}", index);
            return None;
        };
        let (src, alt, caption) = trigger.resolve();

        let mut lightbox = self.lightbox.lock().unwrap();
        lightbox.open(&src, &alt, &caption);
        if !lightbox.is_open() {
            return None;
        }
        Some(LightboxSnapshot { src, alt, caption })
    }

    /// Closes the lightbox and clears its content. Safe when already closed.
    pub fn close(&self) {
        self.lightbox.lock().unwrap().close();
    }

    pub fn is_open(&self) -> bool {
        self.lightbox.lock().unwrap().is_open()
    }
}

/// Credit plates shown in the about dialog. These are the lightbox's
/// trigger elements: explicit full-size source and caption on the first,
/// fallbacks exercised by the second.
pub fn credit_triggers(image_dir: &Path) -> Vec<LightboxTrigger> {
    vec![
        LightboxTrigger {
            thumb_src: image_dir.join("001.jpg"),
            full_src: Some(image_dir.join("001.jpg")),
            alt: "Nihonbashi: Clearing After Snow".to_string(),
            caption: Some("Print 001 opens the series at Nihonbashi bridge.".to_string()),
        },
        LightboxTrigger {
            thumb_src: image_dir.join("099.jpg"),
            full_src: None,
            alt: "Kinryūzan Temple, Asakusa".to_string(),
            caption: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> LightboxService {
        LightboxService::new(
            Arc::new(Mutex::new(LightboxState::new())),
            credit_triggers(Path::new("img/edo")),
        )
    }

    #[test]
    fn trigger_opens_with_resolved_content() {
        let service = service();
        let snapshot = service.open_trigger(0).expect("trigger should open");
        assert_eq!(snapshot.src, PathBuf::from("img/edo/001.jpg"));
        assert!(snapshot.caption.starts_with("Print 001"));
        assert!(service.is_open());
    }

    #[test]
    fn second_trigger_falls_back_to_thumb_and_alt() {
        let service = service();
        let snapshot = service.open_trigger(1).expect("trigger should open");
        assert_eq!(snapshot.src, PathBuf::from("img/edo/099.jpg"));
        assert_eq!(snapshot.caption, "Kinryūzan Temple, Asakusa");
    }

    #[test]
    fn unknown_trigger_leaves_the_lightbox_closed() {
        let service = service();
        assert!(service.open_trigger(99).is_none());
        assert!(!service.is_open());
    }

    #[test]
    fn empty_source_trigger_leaves_the_lightbox_closed() {
        let service = LightboxService::new(
            Arc::new(Mutex::new(LightboxState::new())),
            vec![LightboxTrigger {
                thumb_src: PathBuf::new(),
                full_src: None,
                alt: "alt".to_string(),
                caption: Some("cap".to_string()),
            }],
        );
        assert!(service.open_trigger(0).is_none());
        assert!(!service.is_open());
    }

    #[test]
    fn close_is_idempotent() {
        let service = service();
        service.open_trigger(0);
        service.close();
        assert!(!service.is_open());
        service.close();
        assert!(!service.is_open());
    }
}
