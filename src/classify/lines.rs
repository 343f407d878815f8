//! Line grouping and fragment repair
//!
//! Recognizers report text in arbitrary order and sometimes split a chord
//! symbol in two ("F" + "#m7") or join several words into one fragment.
//! This module turns a page's fragments into printed lines of single words.

use crate::models::{Quad, RecognizedFragment};

/// First characters that mark a fragment as the tail of the chord before it
pub const CONTINUATION_CHARS: &[char] = &['#', 'b', 'm', 's', 'M', '/', 'd', '♯', '♭'];

/// One printed line of fragments, left to right
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    /// Top of the fragment that opened the line
    pub anchor_y: f32,
    pub fragments: Vec<RecognizedFragment>,
}

/// Split fragments that contain whitespace into one fragment per word
///
/// Each word gets the horizontal slice of the box proportional to its
/// character span; the vertical extent is shared.
pub fn split_words(fragment: &RecognizedFragment) -> Vec<RecognizedFragment> {
    let text = fragment.text.trim();
    if !text.contains(char::is_whitespace) {
        if text.is_empty() {
            return Vec::new();
        }
        return vec![RecognizedFragment::new(text, fragment.quad)];
    }

    let chars: Vec<char> = fragment.text.chars().collect();
    let total = chars.len() as f32;
    let x0 = fragment.quad.min_x();
    let width = fragment.quad.width();
    let y0 = fragment.quad.min_y();
    let height = fragment.quad.height();

    let mut words = Vec::new();
    let mut start: Option<usize> = None;
    for i in 0..=chars.len() {
        let boundary = i == chars.len() || chars[i].is_whitespace();
        match (start, boundary) {
            (None, false) => start = Some(i),
            (Some(s), true) => {
                let word: String = chars[s..i].iter().collect();
                let left = x0 + width * s as f32 / total;
                let right = x0 + width * i as f32 / total;
                words.push(RecognizedFragment::new(word, Quad::from_rect(left, y0, right - left, height)));
                start = None;
            }
            _ => {}
        }
    }
    words
}

/// Group fragments into lines by vertical position
///
/// Fragments are visited top to bottom; each joins the line whose anchor is
/// within `tolerance` of its top edge, or opens a new line. The tolerance
/// is kept tight so a chord row never absorbs the lyric row beneath it.
pub fn group_into_lines(fragments: &[RecognizedFragment], tolerance: f32) -> Vec<TextLine> {
    let mut sorted: Vec<&RecognizedFragment> = fragments.iter().collect();
    sorted.sort_by(|a, b| {
        a.quad
            .min_y()
            .total_cmp(&b.quad.min_y())
            .then(a.quad.min_x().total_cmp(&b.quad.min_x()))
    });

    let mut lines: Vec<TextLine> = Vec::new();
    for fragment in sorted {
        let y = fragment.quad.min_y();
        match lines.iter_mut().rev().find(|l| (l.anchor_y - y).abs() <= tolerance) {
            Some(line) => line.fragments.push(fragment.clone()),
            None => lines.push(TextLine {
                anchor_y: y,
                fragments: vec![fragment.clone()],
            }),
        }
    }

    for line in &mut lines {
        line.fragments.sort_by(|a, b| a.quad.min_x().total_cmp(&b.quad.min_x()));
    }
    lines
}

fn is_continuation(text: &str) -> bool {
    text.chars()
        .next()
        .map_or(false, |c| c.is_ascii_digit() || CONTINUATION_CHARS.contains(&c))
}

/// Merge split chord symbols within one line
///
/// Fragment i+1 is folded into fragment i when the horizontal gap between
/// them is below `max_gap` and its text starts with a continuation
/// character. Fragments must already be sorted left to right.
pub fn merge_fragments(fragments: &[RecognizedFragment], max_gap: f32) -> Vec<RecognizedFragment> {
    let mut merged: Vec<RecognizedFragment> = Vec::with_capacity(fragments.len());

    for fragment in fragments {
        if let Some(current) = merged.last_mut() {
            let gap = fragment.quad.min_x() - current.quad.max_x();
            if gap < max_gap && is_continuation(&fragment.text) {
                current.text.push_str(&fragment.text);
                current.quad = current.quad.union(&fragment.quad);
                continue;
            }
        }
        merged.push(fragment.clone());
    }

    merged
}
