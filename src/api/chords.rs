//! Stateless chord operations: classification, key, transposition, capo

use wasm_bindgen::prelude::*;

use super::helpers::{config_from_js, deserialize, deserialize_or_default, engine_error, serialize};
use super::types::KeyEstimate;
use crate::classify::classify_page;
use crate::key::{estimate_key_with, score_roots};
use crate::models::{AccidentalStyle, ChordToken, PageGeometry, RecognizedFragment};
use crate::overlay::layout_badges;
use crate::transposition::{calculate_capo, transpose_with};
use crate::{wasm_info, wasm_log};

/// Classify the page-space fragments of one page
///
/// # Returns
/// `{ accepted_tokens, key_votes }`; both empty when no chords were found
#[wasm_bindgen(js_name = classifyFragments)]
pub fn classify_fragments(
    fragments_js: JsValue,
    page_width: f32,
    page_height: f32,
    config_js: JsValue,
) -> Result<JsValue, JsValue> {
    let fragments: Vec<RecognizedFragment> = deserialize(fragments_js, "Invalid fragments")?;
    let config = config_from_js(config_js)?;
    wasm_info!("classifyFragments called: {} fragments", fragments.len());

    let page = classify_page(&fragments, PageGeometry::new(page_width, page_height), &config.classifier)
        .map_err(engine_error)?;

    wasm_info!("classifyFragments completed: {} chords", page.accepted_tokens.len());
    serialize(&page, "Failed to serialize classified page")
}

/// Estimate the key from chord symbols in reading order
///
/// Each symbol counts for its root; text that is not a chord is skipped.
#[wasm_bindgen(js_name = estimateKey)]
pub fn estimate_key_js(chords_js: JsValue, config_js: JsValue) -> Result<JsValue, JsValue> {
    let chords: Vec<String> = deserialize(chords_js, "Invalid chord symbols")?;
    let config = config_from_js(config_js)?;

    let estimate = KeyEstimate {
        root: estimate_key_with(&chords, &config.key),
        scores: score_roots(&chords, &config.key),
    };
    wasm_log!("estimateKey: {:?} from {} chords", estimate.root, chords.len());
    serialize(&estimate, "Failed to serialize key estimate")
}

/// Transpose one chord symbol; text that is not a chord is returned as-is
///
/// `accidentals_js` is `"auto"`, `"sharps"` or `"flats"` (default `"auto"`).
#[wasm_bindgen(js_name = transposeChord)]
pub fn transpose_chord(text: &str, semitones: i32, accidentals_js: JsValue) -> Result<String, JsValue> {
    let style: AccidentalStyle = deserialize_or_default(accidentals_js, "Invalid accidental style")?;
    Ok(transpose_with(text, semitones, style))
}

/// Capo fret for playing a song in `original_key` with `target_shape` shapes
///
/// # Returns
/// `{ fret, delta }`, or `null` when either key does not parse
#[wasm_bindgen(js_name = calculateCapo)]
pub fn calculate_capo_js(original_key: &str, target_shape: &str) -> Result<JsValue, JsValue> {
    match calculate_capo(original_key, target_shape) {
        Some(capo) => serialize(&capo, "Failed to serialize capo result"),
        None => {
            wasm_log!("calculateCapo: cannot parse '{}' / '{}'", original_key, target_shape);
            Ok(JsValue::NULL)
        }
    }
}

/// Position merged tokens in viewport pixels
#[wasm_bindgen(js_name = layoutBadges)]
pub fn layout_badges_js(tokens_js: JsValue, viewport_width: f32, viewport_height: f32) -> Result<JsValue, JsValue> {
    let tokens: Vec<ChordToken> = deserialize(tokens_js, "Invalid chord tokens")?;
    serialize(
        &layout_badges(&tokens, viewport_width, viewport_height),
        "Failed to serialize badges",
    )
}
