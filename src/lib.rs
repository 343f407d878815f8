//! Chord Overlay WASM Module
//!
//! Detects chord symbols on rendered sheet-music pages, estimates the key,
//! and re-renders the chords transposed by semitones or for a capo shape,
//! merged with the user's corrections.
//!
//! Everything outside `api` is plain Rust and runs natively as well.

pub mod config;
pub mod error;
pub mod models;
pub mod scan;
pub mod classify;
pub mod key;
pub mod transposition;
pub mod overlay;
pub mod api;

// Re-export commonly used types
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use models::*;
pub use classify::{classify_page, map_recognitions, ClassifiedPage};
pub use key::{estimate_key, estimate_key_from_tokens, estimate_key_with};
pub use overlay::{layout_badges, merge_tokens, ChordOverlay, CorrectionStore, RenderBadge};
pub use scan::scan_page;
pub use transposition::{calculate_capo, transpose, transpose_with, CapoResult};

use wasm_bindgen::prelude::*;

#[cfg(feature = "console_log")]
fn init_logging() {
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        crate::wasm_warn!("Logger already initialized: {}", e);
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logging();

    log::info!("Chord Overlay WASM module initialized");
}
