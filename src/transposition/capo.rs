//! Capo position and relative-key calculation
//!
//! Given the key a song sounds in and the chord shapes a player wants to
//! use, find the capo fret and the display transposition. Capoing raises
//! the open pitch by `fret` semitones, so displayed chords move down by the
//! same amount to keep the sounding pitch.

use serde::{Deserialize, Serialize};

use super::lookup_table::pitch_class;
use crate::models::NoteName;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapoResult {
    /// Capo fret, always 0..=11
    pub fret: u8,
    /// Semitones to apply to the displayed chords (`-fret`)
    pub delta: i32,
}

/// Major keys and their relative minors
const RELATIVE_KEYS: [(NoteName, NoteName); 12] = [
    (NoteName::C, NoteName::A),
    (NoteName::G, NoteName::E),
    (NoteName::D, NoteName::B),
    (NoteName::A, NoteName::Fs),
    (NoteName::E, NoteName::Cs),
    (NoteName::B, NoteName::Gs),
    (NoteName::Fs, NoteName::Ds),
    (NoteName::Db, NoteName::Bb),
    (NoteName::Ab, NoteName::F),
    (NoteName::Eb, NoteName::C),
    (NoteName::Bb, NoteName::G),
    (NoteName::F, NoteName::D),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Key {
    tonic: NoteName,
    minor: bool,
}

/// Parse "E", "Em", "E minor", "Emaj", "F# Major", ...
fn parse_key(text: &str) -> Option<Key> {
    let (tonic, rest) = NoteName::parse_prefix(text.trim())?;
    let minor = match rest.trim() {
        "" | "M" | "maj" | "major" | "Maj" | "Major" => false,
        "m" | "min" | "minor" | "Min" | "Minor" | "-" => true,
        _ => return None,
    };
    Some(Key { tonic, minor })
}

/// Whether two keys are a major key and its relative minor, compared by pitch
/// so enharmonic spellings (Gb / Ebm, C# / A#m) match too
fn are_relatives(a: Key, b: Key) -> bool {
    let (major, minor) = match (a.minor, b.minor) {
        (false, true) => (a.tonic, b.tonic),
        (true, false) => (b.tonic, a.tonic),
        _ => return false,
    };
    let (Some(major_pc), Some(minor_pc)) = (pitch_class(major), pitch_class(minor)) else {
        return false;
    };
    RELATIVE_KEYS
        .iter()
        .any(|&(maj, min)| pitch_class(maj) == Some(major_pc) && pitch_class(min) == Some(minor_pc))
}

/// Capo fret and display delta for playing `original_key` with `target_shape` shapes
///
/// Returns `None` when either key does not parse.
pub fn calculate_capo(original_key: &str, target_shape: &str) -> Option<CapoResult> {
    let original = parse_key(original_key)?;
    let target = parse_key(target_shape)?;

    if are_relatives(original, target) {
        return Some(CapoResult { fret: 0, delta: 0 });
    }

    let orig_index = pitch_class(original.tonic)? as i32;
    let target_index = pitch_class(target.tonic)? as i32;
    let fret = (orig_index - target_index).rem_euclid(12) as u8;

    Some(CapoResult {
        fret,
        delta: -(fret as i32),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key() {
        assert_eq!(parse_key("Em"), Some(Key { tonic: NoteName::E, minor: true }));
        assert_eq!(parse_key(" F# major "), Some(Key { tonic: NoteName::Fs, minor: false }));
        assert_eq!(parse_key("Bb minor"), Some(Key { tonic: NoteName::Bb, minor: true }));
        assert_eq!(parse_key("Cmaj"), Some(Key { tonic: NoteName::C, minor: false }));
        assert_eq!(parse_key("Cm7"), None);
        assert_eq!(parse_key("X"), None);
        assert_eq!(parse_key(""), None);
    }

    #[test]
    fn test_relative_keys_need_no_capo() {
        assert_eq!(calculate_capo("C", "Am"), Some(CapoResult { fret: 0, delta: 0 }));
        assert_eq!(calculate_capo("Am", "C"), Some(CapoResult { fret: 0, delta: 0 }));
        assert_eq!(calculate_capo("Em", "G"), Some(CapoResult { fret: 0, delta: 0 }));
        assert_eq!(calculate_capo("Gb", "Ebm"), Some(CapoResult { fret: 0, delta: 0 }));
        assert_eq!(calculate_capo("C#", "A#m"), Some(CapoResult { fret: 0, delta: 0 }));
    }

    #[test]
    fn test_general_case() {
        assert_eq!(calculate_capo("E", "D"), Some(CapoResult { fret: 2, delta: -2 }));
        assert_eq!(calculate_capo("Bb", "G"), Some(CapoResult { fret: 3, delta: -3 }));
        assert_eq!(calculate_capo("D", "E"), Some(CapoResult { fret: 10, delta: -10 }));
        assert_eq!(calculate_capo("Ab", "G#"), Some(CapoResult { fret: 0, delta: 0 }));
        assert_eq!(calculate_capo("F#m", "Em"), Some(CapoResult { fret: 2, delta: -2 }));
    }

    #[test]
    fn test_minor_and_major_of_same_tonic() {
        // Parallel keys are not relatives; only the tonic distance counts
        assert_eq!(calculate_capo("A", "Am"), Some(CapoResult { fret: 0, delta: 0 }));
        assert_eq!(calculate_capo("C", "Em"), Some(CapoResult { fret: 8, delta: -8 }));
    }

    #[test]
    fn test_unparsable_keys() {
        assert_eq!(calculate_capo("H", "D"), None);
        assert_eq!(calculate_capo("E", "chorus"), None);
    }

    #[test]
    fn test_fret_always_in_range() {
        let keys = ["C", "C#", "D", "Eb", "E", "F", "F#", "G", "Ab", "A", "Bb", "B"];
        for a in keys {
            for b in keys {
                let capo = calculate_capo(a, b).unwrap();
                assert!(capo.fret <= 11);
                assert_eq!(capo.delta, -(capo.fret as i32));
            }
        }
    }
}
