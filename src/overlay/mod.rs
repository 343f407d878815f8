//! Correction overlay
//!
//! User corrections layered over detected chords, merged per page at render
//! time, plus the document session that ties pages, corrections and the
//! transposition state together.

pub mod layout;
pub mod merge;
pub mod session;
pub mod store;

pub use layout::{layout_badges, RenderBadge, MIN_BADGE_FONT_PX};
pub use merge::{merge_tokens, sort_reading_order};
pub use session::ChordOverlay;
pub use store::CorrectionStore;
