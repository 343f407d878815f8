//! Chord symbol grammar
//!
//! A chord symbol is `root [quality...] [/bass]` where root and bass are a
//! letter A-G with an optional `#` or `b`, and the quality is any run of the
//! recognised quality tokens. Anything else (lyrics, section labels such as
//! "Chorus") is not a chord.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::note::NoteName;

static CHORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<root>[A-G][#b♯♭]?)(?P<quality>(?:maj|min|dim|aug|sus[24]?|add(?:2|4|9|11|13)?|11|13|m|M|5|6|7|9|\+)*)(?:/(?P<bass>[A-G][#b♯♭]?))?$",
    )
    .expect("chord grammar is a valid regex")
});

/// A parsed chord symbol
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ChordSymbol {
    pub root: NoteName,
    /// Everything between the root and the slash, verbatim ("m7", "sus4", "")
    pub quality: String,
    pub bass: Option<NoteName>,
}

impl ChordSymbol {
    /// Reassemble the symbol with canonical accidentals
    pub fn to_text(&self) -> String {
        match self.bass {
            Some(bass) => format!("{}{}/{}", self.root, self.quality, bass),
            None => format!("{}{}", self.root, self.quality),
        }
    }
}

/// Parse `text` against the chord grammar
pub fn parse_chord(text: &str) -> Option<ChordSymbol> {
    let caps = CHORD_RE.captures(text)?;
    let root = caps.name("root")?.as_str().parse::<NoteName>().ok()?;
    let quality = caps.name("quality").map(|m| m.as_str()).unwrap_or("").to_string();
    let bass = match caps.name("bass") {
        Some(m) => Some(m.as_str().parse::<NoteName>().ok()?),
        None => None,
    };
    Some(ChordSymbol { root, quality, bass })
}

pub fn is_chord(text: &str) -> bool {
    CHORD_RE.is_match(text)
}

/// Root (letter + accidental) of a chord symbol, ignoring quality and bass
pub fn chord_root(text: &str) -> Option<NoteName> {
    parse_chord(text).map(|c| c.root)
}
