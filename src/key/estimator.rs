//! Positional key estimation
//!
//! Input is a sequence of chord symbols; each is reduced to its root, and
//! anything that does not parse as a chord is skipped. Every occurrence of
//! a root earns points, with bonuses for the first, second and last chord
//! of the sequence (songs tend to open and close on the tonic). The
//! highest total wins; ties go to the root that appeared first.

use serde::{Deserialize, Serialize};

use crate::config::KeyWeights;
use crate::models::{chord_root, ChordToken};

/// Accumulated score of one root
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct KeyScore {
    pub root: String,
    pub score: u32,
}

/// Roots of the chords in `chords`, dropping text that is not a chord
fn roots_of<S: AsRef<str>>(chords: &[S]) -> Vec<&'static str> {
    chords
        .iter()
        .filter_map(|c| chord_root(c.as_ref()))
        .map(|n| n.as_str())
        .collect()
}

/// Score every distinct root, in order of first occurrence
pub fn score_roots<S: AsRef<str>>(chords: &[S], weights: &KeyWeights) -> Vec<KeyScore> {
    let roots = roots_of(chords);
    let mut scores: Vec<KeyScore> = Vec::new();
    let last = roots.len().saturating_sub(1);

    for (i, &root) in roots.iter().enumerate() {

        let mut points = weights.occurrence;
        if i == 0 {
            points += weights.first;
        }
        if i == 1 {
            points += weights.second;
        }
        if i == last {
            points += weights.last;
        }

        match scores.iter_mut().find(|s| s.root == root) {
            Some(entry) => entry.score += points,
            None => scores.push(KeyScore {
                root: root.to_string(),
                score: points,
            }),
        }
    }

    scores
}

/// Best-guess tonic for an ordered list of chord symbols
pub fn estimate_key_with<S: AsRef<str>>(chords: &[S], weights: &KeyWeights) -> Option<String> {
    let mut best: Option<KeyScore> = None;
    for candidate in score_roots(chords, weights) {
        // Strict improvement only, so the earliest root keeps a tie
        if best.as_ref().map_or(true, |b| candidate.score > b.score) {
            best = Some(candidate);
        }
    }
    best.map(|b| b.root)
}

/// `estimate_key_with` using the default weights
pub fn estimate_key<S: AsRef<str>>(chords: &[S]) -> Option<String> {
    estimate_key_with(chords, &KeyWeights::default())
}

/// Estimate the key from chord tokens in reading order
///
/// Uses each token's untransposed text, so the result names the key as
/// printed on the page.
pub fn estimate_key_from_tokens(tokens: &[ChordToken], weights: &KeyWeights) -> Option<String> {
    let chords: Vec<&str> = tokens.iter().map(|t| t.original_text.as_str()).collect();
    estimate_key_with(&chords, weights)
}
