//! Stateful overlay session exposed to JavaScript
//!
//! One session per open document. The transposition state lives in the
//! session and is passed explicitly into every merge, so two documents
//! never share it.

use wasm_bindgen::prelude::*;
use uuid::Uuid;

use super::helpers::{config_from_js, deserialize, deserialize_or_default, engine_error, serialize, validation_error};
use crate::classify::ClassifiedPage;
use crate::models::{AccidentalStyle, ChordToken, Correction, TranspositionState};
use crate::overlay::{layout_badges, ChordOverlay};
use crate::transposition::calculate_capo;
use crate::{wasm_info, wasm_log, wasm_warn};

#[wasm_bindgen]
pub struct ChordOverlaySession {
    inner: ChordOverlay,
}

fn parse_id(id: &str) -> Result<Uuid, JsValue> {
    Uuid::parse_str(id).map_err(|e| validation_error(format!("Invalid correction id '{}': {}", id, e)))
}

#[wasm_bindgen]
impl ChordOverlaySession {
    #[wasm_bindgen(constructor)]
    pub fn new(config_js: JsValue) -> Result<ChordOverlaySession, JsValue> {
        let config = config_from_js(config_js)?;
        wasm_info!("ChordOverlaySession created");
        Ok(ChordOverlaySession {
            inner: ChordOverlay::new(config),
        })
    }

    /// Replace the detected tokens of a page; returns its merged tokens
    #[wasm_bindgen(js_name = setDetectedTokens)]
    pub fn set_detected_tokens(&mut self, page_index: usize, tokens_js: JsValue) -> Result<JsValue, JsValue> {
        let tokens: Vec<ChordToken> = deserialize(tokens_js, "Invalid chord tokens")?;
        serialize(&self.inner.set_detected_tokens(page_index, tokens), "Failed to serialize tokens")
    }

    /// Store a `classifyFragments` result for a page; returns its merged tokens
    #[wasm_bindgen(js_name = ingestPage)]
    pub fn ingest_page(&mut self, page_index: usize, classified_js: JsValue) -> Result<JsValue, JsValue> {
        let page: ClassifiedPage = deserialize(classified_js, "Invalid classified page")?;
        serialize(&self.inner.ingest_page(page_index, page), "Failed to serialize tokens")
    }

    #[wasm_bindgen(js_name = clearPage)]
    pub fn clear_page(&mut self, page_index: usize) -> Result<JsValue, JsValue> {
        serialize(&self.inner.clear_page(page_index), "Failed to serialize tokens")
    }

    /// Apply a full correction object (as returned by `corrections()`)
    ///
    /// Its text is taken to be in the original key, whatever the current
    /// transposition.
    #[wasm_bindgen(js_name = applyCorrection)]
    pub fn apply_correction(&mut self, correction_js: JsValue) -> Result<JsValue, JsValue> {
        let correction: Correction = deserialize(correction_js, "Invalid correction")?;
        serialize(&self.inner.apply_correction(correction), "Failed to serialize tokens")
    }

    /// Add a chord at a page position, typed in the displayed key
    #[wasm_bindgen(js_name = addChord)]
    pub fn add_chord(&mut self, page_index: usize, x_pct: f32, y_pct: f32, text: &str) -> Result<JsValue, JsValue> {
        wasm_log!("addChord: '{}' at ({:.1}%, {:.1}%) on page {}", text, x_pct, y_pct, page_index);
        serialize(
            &self.inner.add_displayed_chord(page_index, x_pct, y_pct, text),
            "Failed to serialize tokens",
        )
    }

    /// Hide detected chords near a page position
    #[wasm_bindgen(js_name = hideChord)]
    pub fn hide_chord(&mut self, page_index: usize, x_pct: f32, y_pct: f32, text: &str) -> Result<JsValue, JsValue> {
        wasm_log!("hideChord: '{}' at ({:.1}%, {:.1}%) on page {}", text, x_pct, y_pct, page_index);
        let correction = Correction::remove(page_index, x_pct, y_pct, text);
        serialize(&self.inner.apply_correction(correction), "Failed to serialize tokens")
    }

    #[wasm_bindgen(js_name = removeCorrection)]
    pub fn remove_correction(&mut self, id: &str) -> Result<JsValue, JsValue> {
        let id = parse_id(id)?;
        let tokens = self.inner.remove_correction(id).map_err(engine_error)?;
        serialize(&tokens, "Failed to serialize tokens")
    }

    #[wasm_bindgen(js_name = mergedTokens)]
    pub fn merged_tokens(&self, page_index: usize) -> Result<JsValue, JsValue> {
        serialize(&self.inner.merged_tokens(page_index), "Failed to serialize tokens")
    }

    /// Merged tokens of a page laid out for the viewport
    #[wasm_bindgen(js_name = layoutPage)]
    pub fn layout_page(&self, page_index: usize, viewport_width: f32, viewport_height: f32) -> Result<JsValue, JsValue> {
        let badges = layout_badges(&self.inner.merged_tokens(page_index), viewport_width, viewport_height);
        serialize(&badges, "Failed to serialize badges")
    }

    #[wasm_bindgen(js_name = setTransposition)]
    pub fn set_transposition(&mut self, semitones: i32, accidentals_js: JsValue) -> Result<(), JsValue> {
        let style: AccidentalStyle = deserialize_or_default(accidentals_js, "Invalid accidental style")?;
        self.inner.set_transposition(TranspositionState::new(semitones, style));
        Ok(())
    }

    /// Transpose the display for capo shapes; returns `{ fret, delta }` or `null`
    ///
    /// The transposition is left unchanged when either key does not parse.
    #[wasm_bindgen(js_name = setCapo)]
    pub fn set_capo(&mut self, original_key: &str, target_shape: &str) -> Result<JsValue, JsValue> {
        let Some(capo) = calculate_capo(original_key, target_shape) else {
            wasm_warn!("setCapo: cannot parse '{}' / '{}'", original_key, target_shape);
            return Ok(JsValue::NULL);
        };
        let accidentals = self.inner.transposition().accidentals;
        self.inner.set_transposition(TranspositionState::from_capo(&capo, accidentals));
        serialize(&capo, "Failed to serialize capo result")
    }

    pub fn transposition(&self) -> Result<JsValue, JsValue> {
        serialize(&self.inner.transposition(), "Failed to serialize transposition")
    }

    /// Key as printed on the page, from every visible chord
    #[wasm_bindgen(js_name = estimateKey)]
    pub fn estimate_key(&self) -> Option<String> {
        self.inner.estimate_key()
    }

    /// Estimated key under the current transposition
    #[wasm_bindgen(js_name = displayedKey)]
    pub fn displayed_key(&self) -> Option<String> {
        self.inner.displayed_key()
    }

    /// All corrections, for the caller to persist
    pub fn corrections(&self) -> Result<js_sys::Array, JsValue> {
        let result = js_sys::Array::new();
        for correction in self.inner.corrections() {
            result.push(&serialize(&correction, "Failed to serialize correction")?);
        }
        Ok(result)
    }

    #[wasm_bindgen(js_name = loadCorrections)]
    pub fn load_corrections(&mut self, corrections_js: JsValue) -> Result<(), JsValue> {
        let corrections: Vec<Correction> = deserialize(corrections_js, "Invalid corrections")?;
        wasm_info!("loadCorrections: {} corrections", corrections.len());
        self.inner.load_corrections(corrections);
        Ok(())
    }
}
