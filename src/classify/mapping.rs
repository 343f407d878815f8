//! Strip-space to page-space mapping of recognizer output

use std::collections::HashMap;

use crate::models::{ChordStrip, Point, RecognizedFragment, StripId, StripRecognition};

/// Convert per-strip recognizer responses into page-space fragments
///
/// Responses are matched to strips by id only; their order is irrelevant.
/// A response naming an unknown strip is dropped with a warning.
pub fn map_recognitions(strips: &[ChordStrip], responses: &[StripRecognition]) -> Vec<RecognizedFragment> {
    let by_id: HashMap<StripId, &ChordStrip> = strips.iter().map(|s| (s.id, s)).collect();
    let mut fragments = Vec::new();

    for response in responses {
        let Some(strip) = by_id.get(&response.strip_id) else {
            log::warn!(
                "Dropping {} fragments for unknown strip {:?}",
                response.fragments.len(),
                response.strip_id
            );
            continue;
        };

        for fragment in &response.fragments {
            let quad = fragment.quad.map(|p| {
                let (x, y) = strip.to_page_point(p.x, p.y);
                Point::new(x, y)
            });
            fragments.push(RecognizedFragment::new(fragment.text.clone(), quad));
        }
    }

    log::debug!(
        "Mapped {} fragments from {} responses ({} strips)",
        fragments.len(),
        responses.len(),
        strips.len()
    );
    fragments
}
