//! Render-time merge of detected tokens and user corrections

use crate::config::OverlayConfig;
use crate::models::{ChordToken, Correction, CorrectionKind, TranspositionState};

/// Sort tokens top to bottom, then left to right
pub fn sort_reading_order(tokens: &mut [ChordToken]) {
    tokens.sort_by(|a, b| a.y_pct.total_cmp(&b.y_pct).then(a.x_pct.total_cmp(&b.x_pct)));
}

/// Mean height of the given tokens, as (percent of page, source pixels)
fn average_height(tokens: &[ChordToken]) -> Option<(f32, u32)> {
    if tokens.is_empty() {
        return None;
    }
    let n = tokens.len() as f32;
    let pct = tokens.iter().map(|t| t.height_pct).sum::<f32>() / n;
    let px = tokens.iter().map(|t| t.px_height as f32).sum::<f32>() / n;
    Some((pct, px.round() as u32))
}

/// Whether any `Remove` correction hides this token
fn is_suppressed(token: &ChordToken, removals: &[&Correction], config: &OverlayConfig) -> bool {
    token.is_detected()
        && removals.iter().any(|c| {
            c.is_near(
                token.x_pct,
                token.y_pct,
                config.match_tolerance_x_pct,
                config.match_tolerance_y_pct,
            )
        })
}

/// Tokens to render for one page
///
/// `corrections` must already be filtered to the page. Detected tokens near
/// a `Remove` are hidden (never deleted, so the next merge re-evaluates
/// them); every `Add` contributes a token sized like the page's detected
/// chords. All output text is transposed for `state`.
pub fn merge_tokens(
    detected: &[ChordToken],
    corrections: &[Correction],
    state: &TranspositionState,
    config: &OverlayConfig,
) -> Vec<ChordToken> {
    let removals: Vec<&Correction> = corrections
        .iter()
        .filter(|c| c.kind == CorrectionKind::Remove)
        .collect();

    let (height_pct, px_height) = average_height(detected).unwrap_or((config.default_height_pct, 0));

    let mut merged: Vec<ChordToken> = detected
        .iter()
        .filter(|t| !is_suppressed(t, &removals, config))
        .map(|t| t.transposed(state))
        .collect();

    merged.extend(
        corrections
            .iter()
            .filter(|c| c.kind == CorrectionKind::Add)
            .map(|c| ChordToken::added(c, height_pct, px_height).transposed(state)),
    );

    sort_reading_order(&mut merged);
    merged
}
