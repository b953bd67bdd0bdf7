//! App-level keyboard arbitration.
//!
//! One handler decides which overlay, if any, consumes a key. Precedence is
//! fixed: the fullscreen viewer wins over the about dialog, which wins over
//! the lightbox. There is no modal stack; at most one layer acts per key.

/// Keys the dispatcher cares about. Everything else is left to the toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
}

impl Key {
    /// Parses the tag forwarded by the markup's key handler.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "escape" => Some(Key::Escape),
            "left" => Some(Key::ArrowLeft),
            "right" => Some(Key::ArrowRight),
            _ => None,
        }
    }
}

/// Which overlays are currently open.
#[derive(Debug, Clone, Copy, Default)]
pub struct Layers {
    pub viewer_open: bool,
    pub about_open: bool,
    pub lightbox_open: bool,
}

/// Action a key resolves to under the current layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    ViewerClose,
    ViewerNext,
    ViewerPrev,
    AboutClose,
    LightboxClose,
}

/// Resolves a key press against the open layers. `None` means the key is
/// not consumed and propagates to the toolkit.
pub fn dispatch(key: Key, layers: Layers) -> Option<KeyAction> {
    if layers.viewer_open {
        return Some(match key {
            Key::Escape => KeyAction::ViewerClose,
            Key::ArrowRight => KeyAction::ViewerNext,
            Key::ArrowLeft => KeyAction::ViewerPrev,
        });
    }

    if layers.about_open && key == Key::Escape {
        return Some(KeyAction::AboutClose);
    }

    if layers.lightbox_open && key == Key::Escape {
        return Some(KeyAction::LightboxClose);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_open_consumes_nothing() {
        assert_eq!(dispatch(Key::Escape, Layers::default()), None);
        assert_eq!(dispatch(Key::ArrowLeft, Layers::default()), None);
        assert_eq!(dispatch(Key::ArrowRight, Layers::default()), None);
    }

    #[test]
    fn viewer_handles_all_three_keys() {
        let layers = Layers {
            viewer_open: true,
            ..Layers::default()
        };
        assert_eq!(dispatch(Key::Escape, layers), Some(KeyAction::ViewerClose));
        assert_eq!(dispatch(Key::ArrowRight, layers), Some(KeyAction::ViewerNext));
        assert_eq!(dispatch(Key::ArrowLeft, layers), Some(KeyAction::ViewerPrev));
    }

    #[test]
    fn viewer_takes_precedence_over_dialog() {
        let layers = Layers {
            viewer_open: true,
            about_open: true,
            lightbox_open: true,
        };
        assert_eq!(dispatch(Key::Escape, layers), Some(KeyAction::ViewerClose));
    }

    #[test]
    fn dialog_only_reacts_to_escape() {
        let layers = Layers {
            about_open: true,
            ..Layers::default()
        };
        assert_eq!(dispatch(Key::Escape, layers), Some(KeyAction::AboutClose));
        assert_eq!(dispatch(Key::ArrowLeft, layers), None);
        assert_eq!(dispatch(Key::ArrowRight, layers), None);
    }

    #[test]
    fn lightbox_escape_only_when_open() {
        let layers = Layers {
            lightbox_open: true,
            ..Layers::default()
        };
        assert_eq!(dispatch(Key::Escape, layers), Some(KeyAction::LightboxClose));
        assert_eq!(
            dispatch(Key::Escape, Layers::default()),
            None,
        );
    }

    #[test]
    fn key_tags_parse() {
        assert_eq!(Key::from_tag("escape"), Some(Key::Escape));
        assert_eq!(Key::from_tag("left"), Some(Key::ArrowLeft));
        assert_eq!(Key::from_tag("right"), Some(Key::ArrowRight));
        assert_eq!(Key::from_tag("space"), None);
    }
}
