//! UI module for handling user interactions and UI updates.
//!
//! Threading model:
//! - adapter properties and models are only touched on the Slint event loop;
//! - `rayon::spawn` runs the CPU-heavy image decodes;
//! - `slint::invoke_from_event_loop` carries decoded pixels back to the UI.

pub mod handlers;
pub mod image_display;
mod state_helpers;

pub use handlers::{render_gallery, setup_handlers};
pub use state_helpers::*;
