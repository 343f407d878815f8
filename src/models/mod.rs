//! Models module for the chord engine
//!
//! This module contains the data model shared by the scanner, the
//! classifier, the transposer and the correction overlay.

pub mod bitmap;
pub mod chord_symbol;
pub mod correction;
pub mod fragment;
pub mod note;
pub mod strip;
pub mod token;
pub mod transposition_state;

// Re-export commonly used types
pub use bitmap::PageBitmap;
pub use chord_symbol::{chord_root, is_chord, parse_chord, ChordSymbol};
pub use correction::{Correction, CorrectionKind};
pub use fragment::{PageGeometry, Point, Quad, RecognizedFragment, StripRecognition};
pub use note::{Accidental, NoteName};
pub use strip::{ChordStrip, StripId};
pub use token::{ChordToken, TokenOrigin};
pub use transposition_state::{AccidentalStyle, TranspositionState};
