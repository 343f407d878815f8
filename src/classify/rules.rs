//! Line-level chord/lyric disambiguation
//!
//! A token that passes the chord grammar is not necessarily a chord: the
//! article "A" is both. Decisions are therefore made per line:
//!
//! | line contains                          | verdict        |
//! |----------------------------------------|----------------|
//! | at least one strong chord              | accept chords  |
//! | only grammar-passing tokens (e.g. "A") | accept chords  |
//! | anything else                          | reject line    |
//!
//! The table favours precision: a lone "A" chord inside a lyric line is
//! dropped rather than risk "A boy" producing a spurious chord.

use crate::models::is_chord;

/// Tokens that pass the chord grammar but are also common words
pub const AMBIGUOUS_CHORD_TOKENS: &[&str] = &["A"];

/// Characters stripped from the end of a recognized word before matching
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', '|', ')', ']', '"', '\''];

/// Outcome for one printed line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineVerdict {
    /// Has at least one unambiguous chord
    Strong,
    /// Every token is a chord, but all of them are ambiguous
    ChordsOnly,
    /// Weak or no chords mixed with other words
    Rejected,
}

impl LineVerdict {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, LineVerdict::Rejected)
    }
}

/// Trim whitespace and trailing punctuation from a recognized word
pub fn clean_token(text: &str) -> &str {
    text.trim().trim_end_matches(TRAILING_PUNCTUATION)
}

/// A grammar-passing token that is not in the ambiguous set
pub fn is_strong_chord(token: &str) -> bool {
    is_chord(token) && !AMBIGUOUS_CHORD_TOKENS.contains(&token)
}

/// Judge a line from its cleaned, non-empty tokens
pub fn judge_line<S: AsRef<str>>(tokens: &[S]) -> LineVerdict {
    if tokens.is_empty() {
        return LineVerdict::Rejected;
    }
    if tokens.iter().any(|t| is_strong_chord(t.as_ref())) {
        return LineVerdict::Strong;
    }
    if tokens.iter().all(|t| is_chord(t.as_ref())) {
        return LineVerdict::ChordsOnly;
    }
    LineVerdict::Rejected
}
