//! Chord symbol transposition
//!
//! Pure functions: the same text, delta and accidental style always give
//! the same result. Text that is not a chord symbol comes back unchanged so
//! one bad token never blocks rendering of the rest of a page.

use super::lookup_table::{is_scale_spelling, pitch_class, spell};
use crate::models::{parse_chord, AccidentalStyle, ChordSymbol, NoteName};

/// Collapse a semitone count to its smallest-magnitude equivalent (-5..=6)
pub fn normalize_semitones(semitones: i32) -> i8 {
    let r = semitones.rem_euclid(12);
    if r > 6 {
        (r - 12) as i8
    } else {
        r as i8
    }
}

/// Transpose a note name by `shift` semitones (0..12), spelled from the chosen scale
fn transpose_note(note: NoteName, shift: u8, prefer_flats: bool) -> Option<NoteName> {
    let index = pitch_class(note)?;
    Some(spell((index + shift) % 12, prefer_flats))
}

/// Transpose a chord symbol, spelling accidentals like the original root
pub fn transpose(text: &str, semitones: i32) -> String {
    transpose_with(text, semitones, AccidentalStyle::Auto)
}

/// Transpose a chord symbol by `semitones` with an explicit accidental style
///
/// A slash bass is transposed through the same scale as the root. A shift
/// that is a multiple of 12 returns the input bit-for-bit, unless a note is
/// spelled outside both scales (Fb, Cb, E#, B#), in which case it is
/// respelled ("Fb" → "E").
pub fn transpose_with(text: &str, semitones: i32, style: AccidentalStyle) -> String {
    let Some(chord) = parse_chord(text) else {
        return text.to_string();
    };

    let shift = semitones.rem_euclid(12) as u8;
    let canonical = is_scale_spelling(chord.root) && chord.bass.map_or(true, is_scale_spelling);
    if shift == 0 && canonical {
        return text.to_string();
    }

    let prefer_flats = match style {
        AccidentalStyle::Auto => chord.root.is_flat(),
        AccidentalStyle::Sharps => false,
        AccidentalStyle::Flats => true,
    };

    let Some(root) = transpose_note(chord.root, shift, prefer_flats) else {
        return text.to_string();
    };
    let bass = match chord.bass {
        Some(bass) => match transpose_note(bass, shift, prefer_flats) {
            Some(b) => Some(b),
            None => return text.to_string(),
        },
        None => None,
    };

    ChordSymbol { root, bass, ..chord }.to_text()
}
