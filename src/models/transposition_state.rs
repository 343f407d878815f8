use serde::{Deserialize, Serialize};

use crate::transposition::{normalize_semitones, CapoResult};

/// How transposed roots are spelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccidentalStyle {
    /// Flats when the original root is flat-spelled, sharps otherwise
    #[default]
    Auto,
    Sharps,
    Flats,
}

/// Current transposition of an open document
///
/// Passed explicitly into every render/transposition call. The offset is
/// always kept normalized to its smallest-magnitude equivalent.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TranspositionState {
    pub semitone_offset: i8,
    #[serde(default)]
    pub accidentals: AccidentalStyle,
}

impl TranspositionState {
    pub fn new(semitones: i32, accidentals: AccidentalStyle) -> Self {
        Self {
            semitone_offset: normalize_semitones(semitones),
            accidentals,
        }
    }

    /// State that displays shapes for the given capo position
    pub fn from_capo(capo: &CapoResult, accidentals: AccidentalStyle) -> Self {
        Self::new(capo.delta, accidentals)
    }

    /// State moved by `semitones` further
    pub fn shifted(&self, semitones: i32) -> Self {
        Self::new(self.semitone_offset as i32 + semitones, self.accidentals)
    }

    pub fn is_identity(&self) -> bool {
        self.semitone_offset == 0
    }
}
