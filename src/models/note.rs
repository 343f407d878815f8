/// Note names that can open a chord symbol or name a key
///
/// Covers the 21 single-accidental spellings of the seven letters:
/// - 7 naturals (C, D, E, F, G, A, B)
/// - 7 sharps (C#, D#, E#, F#, G#, A#, B#)
/// - 7 flats (Cb, Db, Eb, Fb, Gb, Ab, Bb)
///
/// Enharmonic spellings stay distinct here (C# and Db are different values)
/// because the printed spelling decides how a transposed chord is spelled.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Accidental attached to a note letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accidental {
    Natural,
    Sharp,
    Flat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteName {
    Cb,
    C,
    #[serde(rename = "C#")]
    Cs,
    Db,
    D,
    #[serde(rename = "D#")]
    Ds,
    Eb,
    Fb,
    E,
    #[serde(rename = "E#")]
    Es,
    F,
    #[serde(rename = "F#")]
    Fs,
    Gb,
    G,
    #[serde(rename = "G#")]
    Gs,
    Ab,
    A,
    #[serde(rename = "A#")]
    As,
    Bb,
    B,
    #[serde(rename = "B#")]
    Bs,
}

impl NoteName {
    /// Convert the note name to its printed form
    pub fn as_str(&self) -> &'static str {
        match self {
            NoteName::Cb => "Cb",
            NoteName::C => "C",
            NoteName::Cs => "C#",
            NoteName::Db => "Db",
            NoteName::D => "D",
            NoteName::Ds => "D#",
            NoteName::Eb => "Eb",
            NoteName::Fb => "Fb",
            NoteName::E => "E",
            NoteName::Es => "E#",
            NoteName::F => "F",
            NoteName::Fs => "F#",
            NoteName::Gb => "Gb",
            NoteName::G => "G",
            NoteName::Gs => "G#",
            NoteName::Ab => "Ab",
            NoteName::A => "A",
            NoteName::As => "A#",
            NoteName::Bb => "Bb",
            NoteName::B => "B",
            NoteName::Bs => "B#",
        }
    }

    pub fn accidental(&self) -> Accidental {
        match self {
            NoteName::Cs | NoteName::Ds | NoteName::Es | NoteName::Fs
            | NoteName::Gs | NoteName::As | NoteName::Bs => Accidental::Sharp,
            NoteName::Cb | NoteName::Db | NoteName::Eb | NoteName::Fb
            | NoteName::Gb | NoteName::Ab | NoteName::Bb => Accidental::Flat,
            _ => Accidental::Natural,
        }
    }

    pub fn is_flat(&self) -> bool {
        self.accidental() == Accidental::Flat
    }

    fn from_parts(letter: char, accidental: Accidental) -> Option<Self> {
        let note = match (letter, accidental) {
            ('C', Accidental::Flat) => NoteName::Cb,
            ('C', Accidental::Natural) => NoteName::C,
            ('C', Accidental::Sharp) => NoteName::Cs,
            ('D', Accidental::Flat) => NoteName::Db,
            ('D', Accidental::Natural) => NoteName::D,
            ('D', Accidental::Sharp) => NoteName::Ds,
            ('E', Accidental::Flat) => NoteName::Eb,
            ('E', Accidental::Natural) => NoteName::E,
            ('E', Accidental::Sharp) => NoteName::Es,
            ('F', Accidental::Flat) => NoteName::Fb,
            ('F', Accidental::Natural) => NoteName::F,
            ('F', Accidental::Sharp) => NoteName::Fs,
            ('G', Accidental::Flat) => NoteName::Gb,
            ('G', Accidental::Natural) => NoteName::G,
            ('G', Accidental::Sharp) => NoteName::Gs,
            ('A', Accidental::Flat) => NoteName::Ab,
            ('A', Accidental::Natural) => NoteName::A,
            ('A', Accidental::Sharp) => NoteName::As,
            ('B', Accidental::Flat) => NoteName::Bb,
            ('B', Accidental::Natural) => NoteName::B,
            ('B', Accidental::Sharp) => NoteName::Bs,
            _ => return None,
        };
        Some(note)
    }

    /// Parse a leading `[A-G][#b]?` from `text`, returning the note and the rest
    ///
    /// The accidental is taken greedily, so "Bbm" is Bb + "m". The typographic
    /// signs ♯ and ♭ are accepted as well.
    pub fn parse_prefix(text: &str) -> Option<(NoteName, &str)> {
        let mut chars = text.char_indices();
        let (_, letter) = chars.next()?;
        if !('A'..='G').contains(&letter) {
            return None;
        }

        let rest_start = letter.len_utf8();
        let (accidental, consumed) = match chars.next() {
            Some((_, c @ ('#' | '♯'))) => (Accidental::Sharp, c.len_utf8()),
            Some((_, c @ ('b' | '♭'))) => (Accidental::Flat, c.len_utf8()),
            _ => (Accidental::Natural, 0),
        };

        let note = NoteName::from_parts(letter, accidental)?;
        Some((note, &text[rest_start + consumed..]))
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NoteName {
    type Err = String;

    /// Strict parse: the whole string must be a note name. Case-sensitive,
    /// since a lowercase "b" is the flat sign in chord spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match NoteName::parse_prefix(s.trim()) {
            Some((note, "")) => Ok(note),
            _ => Err(format!("Invalid note name: '{}'. Expected a letter A-G with optional # or b", s)),
        }
    }
}
