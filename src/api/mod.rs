//! Chord Overlay WASM API
//!
//! This module provides the JavaScript-facing API for the chord engine.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, config, error handling, and logging
//! - `types`: Result types shared across calls
//! - `scan`: Page scanning and recognizer-output mapping
//! - `chords`: Stateless classification, key, transposition and capo calls
//! - `session`: `ChordOverlaySession`, the per-document overlay state

pub mod helpers;
pub mod types;
pub mod scan;
pub mod chords;
pub mod session;

pub use scan::{scan_page_js, map_recognitions_js};
pub use chords::{classify_fragments, estimate_key_js, transpose_chord, calculate_capo_js, layout_badges_js};
pub use session::ChordOverlaySession;
