//! Per-document chord overlay state
//!
//! Holds what the classifier found on each page, the user's corrections
//! and the current transposition. Every mutating call returns the merged
//! tokens of the affected page so the caller can re-render it directly.

use std::collections::BTreeMap;

use uuid::Uuid;

use super::merge::merge_tokens;
use super::store::CorrectionStore;
use crate::classify::ClassifiedPage;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::key::estimate_key_from_tokens;
use crate::models::{ChordToken, Correction, TranspositionState};
use crate::transposition::transpose_with;

#[derive(Clone, Debug, Default)]
pub struct ChordOverlay {
    config: EngineConfig,
    detected: BTreeMap<usize, Vec<ChordToken>>,
    corrections: CorrectionStore,
    state: TranspositionState,
}

impl ChordOverlay {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Replace the detected tokens of a page (a rescan)
    ///
    /// Corrections are kept; `Remove`s are matched against the new tokens
    /// on the next merge.
    pub fn set_detected_tokens(&mut self, page_index: usize, tokens: Vec<ChordToken>) -> Vec<ChordToken> {
        log::debug!("Page {}: {} detected tokens", page_index, tokens.len());
        self.detected.insert(page_index, tokens);
        self.merged_tokens(page_index)
    }

    /// Store the classifier output of a page
    pub fn ingest_page(&mut self, page_index: usize, page: ClassifiedPage) -> Vec<ChordToken> {
        self.set_detected_tokens(page_index, page.accepted_tokens)
    }

    /// Forget the detected tokens of a page; its corrections stay
    pub fn clear_page(&mut self, page_index: usize) -> Vec<ChordToken> {
        self.detected.remove(&page_index);
        self.merged_tokens(page_index)
    }

    pub fn detected_tokens(&self, page_index: usize) -> &[ChordToken] {
        self.detected.get(&page_index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Record a correction and return its page's merged tokens
    ///
    /// The text is stored as given, in the page's original key. A correction
    /// whose id is already stored replaces it.
    pub fn apply_correction(&mut self, correction: Correction) -> Vec<ChordToken> {
        let page_index = correction.page_index;
        log::info!(
            "Applying {:?} correction {} on page {}",
            correction.kind,
            correction.id,
            page_index
        );
        self.corrections.insert(correction);
        self.merged_tokens(page_index)
    }

    /// Add a chord typed in the current display key
    ///
    /// The text is moved back into the original key before it is stored,
    /// so it follows later transpositions.
    pub fn add_displayed_chord(&mut self, page_index: usize, x_pct: f32, y_pct: f32, text: &str) -> Vec<ChordToken> {
        let original = if self.state.is_identity() {
            text.to_string()
        } else {
            transpose_with(text, -(self.state.semitone_offset as i32), self.state.accidentals)
        };
        self.apply_correction(Correction::add(page_index, x_pct, y_pct, original))
    }

    /// Delete a correction and return its page's merged tokens
    pub fn remove_correction(&mut self, id: Uuid) -> Result<Vec<ChordToken>> {
        let removed = self.corrections.remove(id)?;
        log::info!("Removed correction {} from page {}", id, removed.page_index);
        Ok(self.merged_tokens(removed.page_index))
    }

    /// Tokens to render on a page under the current transposition
    pub fn merged_tokens(&self, page_index: usize) -> Vec<ChordToken> {
        merge_tokens(
            self.detected_tokens(page_index),
            self.corrections.for_page(page_index),
            &self.state,
            &self.config.overlay,
        )
    }

    /// Visible tokens of every page that has tokens or corrections, in reading order
    pub fn all_merged_tokens(&self) -> Vec<ChordToken> {
        let mut pages: Vec<usize> = self.detected.keys().copied().collect();
        pages.extend(self.corrections.all().iter().map(|c| c.page_index));
        pages.sort_unstable();
        pages.dedup();

        pages.into_iter().flat_map(|p| self.merged_tokens(p)).collect()
    }

    pub fn set_transposition(&mut self, state: TranspositionState) {
        self.state = TranspositionState::new(state.semitone_offset as i32, state.accidentals);
        log::info!(
            "Transposition set to {} semitones ({:?})",
            self.state.semitone_offset,
            self.state.accidentals
        );
    }

    pub fn transposition(&self) -> TranspositionState {
        self.state
    }

    /// Key of the document as printed, from every visible chord
    pub fn estimate_key(&self) -> Option<String> {
        estimate_key_from_tokens(&self.all_merged_tokens(), &self.config.key)
    }

    /// Estimated key under the current transposition
    pub fn displayed_key(&self) -> Option<String> {
        self.estimate_key()
            .map(|key| transpose_with(&key, self.state.semitone_offset as i32, self.state.accidentals))
    }

    /// Every correction, for the caller to persist
    pub fn corrections(&self) -> Vec<Correction> {
        self.corrections.all()
    }

    /// Replace all corrections with a persisted list
    pub fn load_corrections(&mut self, corrections: Vec<Correction>) {
        log::debug!("Loading {} persisted corrections", corrections.len());
        self.corrections = CorrectionStore::from_corrections(corrections);
    }
}
