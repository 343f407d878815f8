/// Chromatic lookup tables for semitone arithmetic on note names
///
/// Two parallel 12-tone scales, one sharp-spelled and one flat-spelled,
/// index pitch classes 0-11 from C. Spellings that appear in neither scale
/// (Cb, Fb, E#, B#) resolve through the enharmonic table first.
///
/// Example:
///   pitch_class(Db) → 1   (flat scale)
///   pitch_class(Fb) → 4   (Fb ↔ E, then sharp scale)
///   spell(10, true)  → Bb
///   spell(10, false) → A#

use crate::models::NoteName;

pub const SHARP_SCALE: [NoteName; 12] = [
    NoteName::C,
    NoteName::Cs,
    NoteName::D,
    NoteName::Ds,
    NoteName::E,
    NoteName::F,
    NoteName::Fs,
    NoteName::G,
    NoteName::Gs,
    NoteName::A,
    NoteName::As,
    NoteName::B,
];

pub const FLAT_SCALE: [NoteName; 12] = [
    NoteName::C,
    NoteName::Db,
    NoteName::D,
    NoteName::Eb,
    NoteName::E,
    NoteName::F,
    NoteName::Gb,
    NoteName::G,
    NoteName::Ab,
    NoteName::A,
    NoteName::Bb,
    NoteName::B,
];

/// Pairs of spellings for the same pitch
const ENHARMONICS: [(NoteName, NoteName); 9] = [
    (NoteName::Cs, NoteName::Db),
    (NoteName::Ds, NoteName::Eb),
    (NoteName::Fs, NoteName::Gb),
    (NoteName::Gs, NoteName::Ab),
    (NoteName::As, NoteName::Bb),
    (NoteName::Cb, NoteName::B),
    (NoteName::Fb, NoteName::E),
    (NoteName::Es, NoteName::F),
    (NoteName::Bs, NoteName::C),
];

fn scale_index(note: NoteName) -> Option<u8> {
    SHARP_SCALE
        .iter()
        .position(|&n| n == note)
        .or_else(|| FLAT_SCALE.iter().position(|&n| n == note))
        .map(|i| i as u8)
}

/// The other spelling of `note`, if it has one in the table
pub fn enharmonic(note: NoteName) -> Option<NoteName> {
    ENHARMONICS.iter().find_map(|&(a, b)| {
        if a == note {
            Some(b)
        } else if b == note {
            Some(a)
        } else {
            None
        }
    })
}

/// Pitch class (0 = C .. 11 = B) of a note name
pub fn pitch_class(note: NoteName) -> Option<u8> {
    scale_index(note).or_else(|| enharmonic(note).and_then(scale_index))
}

/// Whether the spelling appears directly in one of the two scales
pub fn is_scale_spelling(note: NoteName) -> bool {
    scale_index(note).is_some()
}

/// Spell a pitch class from the flat or the sharp scale
pub fn spell(pitch_class: u8, prefer_flats: bool) -> NoteName {
    let index = (pitch_class % 12) as usize;
    if prefer_flats {
        FLAT_SCALE[index]
    } else {
        SHARP_SCALE[index]
    }
}
