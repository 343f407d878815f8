//! Badge layout for rendering
//!
//! Projects merged tokens onto the current viewport so the JavaScript side
//! only has to position elements, with no layout calculations of its own.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{ChordToken, TokenOrigin};

/// Smallest font size a badge is drawn with
pub const MIN_BADGE_FONT_PX: f32 = 10.0;

/// A chord badge positioned in viewport pixels
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderBadge {
    /// Transposed chord text to display
    pub text: String,

    /// Left edge in viewport pixels
    pub x: f32,

    /// Top edge in viewport pixels
    pub y: f32,

    pub font_size: f32,

    pub origin: TokenOrigin,

    /// Set for user-added badges so the UI can offer "remove"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correction_id: Option<Uuid>,
}

/// Lay out tokens for a viewport of the given size
pub fn layout_badges(tokens: &[ChordToken], viewport_width: f32, viewport_height: f32) -> Vec<RenderBadge> {
    tokens
        .iter()
        .map(|token| RenderBadge {
            text: token.text.clone(),
            x: token.x_pct / 100.0 * viewport_width,
            y: token.y_pct / 100.0 * viewport_height,
            font_size: (token.height_pct / 100.0 * viewport_height).max(MIN_BADGE_FONT_PX),
            origin: token.origin,
            correction_id: token.correction_id,
        })
        .collect()
}
