//! Token classification
//!
//! Turns the recognized fragments of one page into chord tokens:
//!
//! 1. split multi-word fragments into words
//! 2. group words into printed lines (tight vertical tolerance)
//! 3. merge chord symbols the recognizer split in two
//! 4. clean each word and test it against the chord grammar
//! 5. accept or reject each line as a whole (see `rules`)
//! 6. count a key vote for the root of every accepted chord

pub mod lines;
pub mod mapping;
pub mod rules;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::ClassifierConfig;
use crate::error::{EngineError, Result};
use crate::models::{chord_root, is_chord, ChordToken, PageGeometry, RecognizedFragment};

pub use lines::{group_into_lines, merge_fragments, split_words, TextLine};
pub use mapping::map_recognitions;
pub use rules::{clean_token, judge_line, LineVerdict, AMBIGUOUS_CHORD_TOKENS};

/// Classifier output for one page
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ClassifiedPage {
    /// Accepted chords, top to bottom then left to right
    pub accepted_tokens: Vec<ChordToken>,
    /// Occurrence count per chord root
    pub key_votes: BTreeMap<String, u32>,
}

impl ClassifiedPage {
    /// True when no chords were found (a normal outcome, not an error)
    pub fn is_empty(&self) -> bool {
        self.accepted_tokens.is_empty()
    }

    /// Roots of the accepted tokens in reading order
    pub fn roots(&self) -> Vec<&'static str> {
        self.accepted_tokens
            .iter()
            .filter_map(|t| chord_root(&t.original_text))
            .map(|n| n.as_str())
            .collect()
    }
}

fn validate(fragments: &[RecognizedFragment], geometry: &PageGeometry) -> Result<()> {
    if !(geometry.width.is_finite() && geometry.width > 0.0)
        || !(geometry.height.is_finite() && geometry.height > 0.0)
    {
        return Err(EngineError::invalid(format!(
            "page geometry must be positive, got {}x{}",
            geometry.width, geometry.height
        )));
    }
    if let Some(bad) = fragments.iter().find(|f| !f.quad.is_finite()) {
        return Err(EngineError::invalid(format!(
            "fragment '{}' has non-finite coordinates",
            bad.text
        )));
    }
    Ok(())
}

fn to_token(text: &str, fragment: &RecognizedFragment, geometry: &PageGeometry) -> ChordToken {
    let quad = &fragment.quad;
    ChordToken::detected(
        text,
        quad.min_x() / geometry.width * 100.0,
        quad.min_y() / geometry.height * 100.0,
        quad.height() / geometry.height * 100.0,
        quad.height().round().max(0.0) as u32,
    )
}

/// Classify the recognized fragments of one page
///
/// An empty fragment list yields an empty page. Non-finite coordinates or
/// a degenerate page geometry fail with `InvalidInput`.
pub fn classify_page(
    fragments: &[RecognizedFragment],
    geometry: PageGeometry,
    config: &ClassifierConfig,
) -> Result<ClassifiedPage> {
    validate(fragments, &geometry)?;

    let words: Vec<RecognizedFragment> = fragments.iter().flat_map(split_words).collect();
    let lines = group_into_lines(&words, config.line_tolerance_px);

    let mut page = ClassifiedPage::default();
    let mut rejected_lines = 0usize;

    for line in &lines {
        let merged = merge_fragments(&line.fragments, config.merge_gap_px);

        let candidates: Vec<(&str, &RecognizedFragment)> = merged
            .iter()
            .map(|f| (clean_token(&f.text), f))
            .filter(|(text, _)| !text.is_empty())
            .collect();
        let texts: Vec<&str> = candidates.iter().map(|(t, _)| *t).collect();

        let verdict = judge_line(&texts);
        log::debug!("Line at y={:.1}: {:?} -> {:?}", line.anchor_y, texts, verdict);
        if !verdict.is_accepted() {
            rejected_lines += 1;
            continue;
        }

        for (text, fragment) in candidates {
            if !is_chord(text) {
                continue;
            }
            if let Some(root) = chord_root(text) {
                *page.key_votes.entry(root.as_str().to_string()).or_insert(0) += 1;
            }
            page.accepted_tokens.push(to_token(text, fragment, &geometry));
        }
    }

    log::info!(
        "Classified {} fragments into {} lines: {} chords accepted, {} lines rejected",
        fragments.len(),
        lines.len(),
        page.accepted_tokens.len(),
        rejected_lines
    );
    Ok(page)
}
