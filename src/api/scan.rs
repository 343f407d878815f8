//! Page scanning and recognizer-output mapping

use wasm_bindgen::prelude::*;

use super::helpers::{config_from_js, deserialize, engine_error, now_ms, serialize};
use super::types::ScanResult;
use crate::classify::map_recognitions;
use crate::models::{ChordStrip, PageBitmap, RecognizedFragment, StripRecognition};
use crate::scan::scan_page;
use crate::{wasm_info, wasm_log};

/// Find candidate chord strips on a rendered page
///
/// # Parameters
/// - `width`, `height`: bitmap size in pixels
/// - `rgba`: row-major RGBA bytes (`ImageData.data`)
/// - `config_js`: optional engine config; defaults when `undefined`
///
/// # Returns
/// `{ strips, elapsed_ms }`; `strips` is empty for a blank page
#[wasm_bindgen(js_name = scanPage)]
pub fn scan_page_js(width: u32, height: u32, rgba: &[u8], config_js: JsValue) -> Result<JsValue, JsValue> {
    wasm_info!("scanPage called: {}x{}", width, height);
    let config = config_from_js(config_js)?;

    let started = now_ms();
    let bitmap = PageBitmap::from_rgba(width, height, rgba.to_vec()).map_err(engine_error)?;
    let strips = scan_page(&bitmap, &config.scan).map_err(engine_error)?;
    let elapsed_ms = now_ms() - started;

    wasm_info!("scanPage completed: {} strips in {:.1}ms", strips.len(), elapsed_ms);
    serialize(&ScanResult { strips, elapsed_ms }, "Failed to serialize strips")
}

/// Convert per-strip recognizer responses to page-space fragments
///
/// Responses are matched to strips by `strip_id`; unknown ids are dropped.
#[wasm_bindgen(js_name = mapRecognitions)]
pub fn map_recognitions_js(strips_js: JsValue, responses_js: JsValue) -> Result<JsValue, JsValue> {
    let strips: Vec<ChordStrip> = deserialize(strips_js, "Invalid strips")?;
    let responses: Vec<StripRecognition> = deserialize(responses_js, "Invalid recognition responses")?;
    wasm_log!("mapRecognitions: {} strips, {} responses", strips.len(), responses.len());

    let fragments: Vec<RecognizedFragment> = map_recognitions(&strips, &responses);
    serialize(&fragments, "Failed to serialize fragments")
}
