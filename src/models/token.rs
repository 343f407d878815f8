use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::correction::Correction;
use super::transposition_state::TranspositionState;
use crate::transposition::transpose_with;

/// Where a chord token came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenOrigin {
    /// Found on the page by the classifier
    Detected,
    /// Placed by the user through an `Add` correction
    Added,
}

/// A chord symbol positioned on a page
///
/// `original_text` is fixed at creation; `text` is always `original_text`
/// transposed by the transposition state of the last render pass.
/// Positions are percentages of the page so they survive re-rendering at
/// any resolution.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChordToken {
    pub text: String,
    pub original_text: String,
    pub x_pct: f32,
    pub y_pct: f32,
    pub height_pct: f32,
    /// Height in source pixels, used for font-size heuristics
    pub px_height: u32,
    pub origin: TokenOrigin,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correction_id: Option<Uuid>,
}

impl ChordToken {
    /// Create a detected token (untransposed)
    pub fn detected(text: impl Into<String>, x_pct: f32, y_pct: f32, height_pct: f32, px_height: u32) -> Self {
        let text = text.into();
        Self {
            original_text: text.clone(),
            text,
            x_pct,
            y_pct,
            height_pct,
            px_height,
            origin: TokenOrigin::Detected,
            correction_id: None,
        }
    }

    /// Create the token owned by an `Add` correction
    pub fn added(correction: &Correction, height_pct: f32, px_height: u32) -> Self {
        Self {
            text: correction.text.clone(),
            original_text: correction.text.clone(),
            x_pct: correction.x_pct,
            y_pct: correction.y_pct,
            height_pct,
            px_height,
            origin: TokenOrigin::Added,
            correction_id: Some(correction.id),
        }
    }

    /// Copy of this token with `text` recomputed for `state`
    pub fn transposed(&self, state: &TranspositionState) -> ChordToken {
        ChordToken {
            text: transpose_with(&self.original_text, state.semitone_offset as i32, state.accidentals),
            ..self.clone()
        }
    }

    pub fn is_detected(&self) -> bool {
        self.origin == TokenOrigin::Detected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::transposition_state::AccidentalStyle;

    #[test]
    fn test_detected_token_starts_untransposed() {
        let token = ChordToken::detected("F#m7", 10.0, 20.0, 1.5, 18);
        assert_eq!(token.text, "F#m7");
        assert_eq!(token.original_text, "F#m7");
        assert!(token.is_detected());
        assert!(token.correction_id.is_none());
    }

    #[test]
    fn test_transposed_keeps_original() {
        let token = ChordToken::detected("G/B", 10.0, 20.0, 1.5, 18);
        let state = TranspositionState::new(2, AccidentalStyle::Auto);
        let moved = token.transposed(&state);
        assert_eq!(moved.text, "A/C#");
        assert_eq!(moved.original_text, "G/B");
        assert_eq!(moved.x_pct, 10.0);

        let back = moved.transposed(&TranspositionState::default());
        assert_eq!(back.text, "G/B");
    }

    #[test]
    fn test_added_token_links_correction() {
        let correction = Correction::add(0, 5.0, 6.0, "Dsus4");
        let token = ChordToken::added(&correction, 2.0, 20);
        assert_eq!(token.origin, TokenOrigin::Added);
        assert_eq!(token.correction_id, Some(correction.id));
        assert_eq!(token.text, "Dsus4");
    }
}
