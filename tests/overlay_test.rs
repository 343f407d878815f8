use chord_overlay_wasm::classify::classify_page;
use chord_overlay_wasm::config::{EngineConfig, OverlayConfig};
use chord_overlay_wasm::models::{
    AccidentalStyle, ChordToken, Correction, PageGeometry, Quad, RecognizedFragment, TokenOrigin, TranspositionState,
};
use chord_overlay_wasm::overlay::{layout_badges, merge_tokens, ChordOverlay};

fn token(text: &str, x: f32, y: f32) -> ChordToken {
    ChordToken::detected(text, x, y, 1.5, 18)
}

fn texts(tokens: &[ChordToken]) -> Vec<&str> {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

#[test]
fn test_nearby_remove_suppresses_token() {
    let detected = vec![token("G", 10.0, 10.0)];
    let corrections = vec![Correction::remove(0, 10.5, 10.2, "G")];
    let merged = merge_tokens(&detected, &corrections, &TranspositionState::default(), &OverlayConfig::default());
    assert!(merged.is_empty());
}

#[test]
fn test_far_remove_suppresses_nothing() {
    let detected = vec![token("G", 10.0, 10.0), token("D", 30.0, 10.0)];
    let corrections = vec![Correction::remove(0, 60.0, 45.0, "Em")];
    let merged = merge_tokens(&detected, &corrections, &TranspositionState::default(), &OverlayConfig::default());
    assert_eq!(texts(&merged), vec!["G", "D"]);
}

#[test]
fn test_corrections_are_filtered_by_page() {
    let mut overlay = ChordOverlay::new(EngineConfig::default());
    overlay.set_detected_tokens(0, vec![token("G", 10.0, 10.0)]);
    overlay.set_detected_tokens(1, vec![token("G", 10.0, 10.0)]);

    overlay.apply_correction(Correction::remove(1, 10.0, 10.0, "G"));
    assert_eq!(texts(&overlay.merged_tokens(0)), vec!["G"]);
    assert!(overlay.merged_tokens(1).is_empty());
}

#[test]
fn test_add_then_remove_correction() {
    let mut overlay = ChordOverlay::new(EngineConfig::default());
    overlay.set_detected_tokens(0, vec![token("C", 10.0, 20.0)]);

    let add = Correction::add(0, 40.0, 20.0, "F");
    let id = add.id;
    let merged = overlay.apply_correction(add);
    assert_eq!(texts(&merged), vec!["C", "F"]);
    assert_eq!(merged[1].origin, TokenOrigin::Added);
    assert_eq!(merged[1].correction_id, Some(id));

    let merged = overlay.remove_correction(id).unwrap();
    assert_eq!(texts(&merged), vec!["C"]);
    assert!(overlay.corrections().is_empty());
}

#[test]
fn test_transposition_applies_to_every_token() {
    let mut overlay = ChordOverlay::new(EngineConfig::default());
    overlay.set_detected_tokens(0, vec![token("G", 10.0, 10.0), token("Em", 30.0, 10.0)]);
    overlay.apply_correction(Correction::add(0, 50.0, 10.0, "C"));

    overlay.set_transposition(TranspositionState::new(14, AccidentalStyle::Auto));
    assert_eq!(overlay.transposition().semitone_offset, 2);
    let merged = overlay.merged_tokens(0);
    assert_eq!(texts(&merged), vec!["A", "F#m", "D"]);
    for t in &merged {
        assert_ne!(t.text, t.original_text);
    }

    overlay.set_transposition(TranspositionState::default());
    assert_eq!(texts(&overlay.merged_tokens(0)), vec!["G", "Em", "C"]);
}

#[test]
fn test_persisted_corrections_survive_rescan() {
    let mut first = ChordOverlay::new(EngineConfig::default());
    first.set_detected_tokens(0, vec![token("A", 10.0, 10.0), token("E", 30.0, 10.0)]);
    first.apply_correction(Correction::remove(0, 10.0, 10.0, "A"));
    let saved = serde_json::to_string(&first.corrections()).unwrap();

    let mut second = ChordOverlay::new(EngineConfig::default());
    second.load_corrections(serde_json::from_str(&saved).unwrap());
    let merged = second.set_detected_tokens(0, vec![token("A", 10.4, 10.3), token("E", 30.0, 10.0)]);
    assert_eq!(texts(&merged), vec!["E"]);
}

#[test]
fn test_scan_to_badges_pipeline() {
    let fragments = vec![
        RecognizedFragment::new("G", Quad::from_rect(100.0, 200.0, 12.0, 20.0)),
        RecognizedFragment::new("C", Quad::from_rect(400.0, 200.0, 12.0, 20.0)),
        RecognizedFragment::new("D", Quad::from_rect(100.0, 600.0, 12.0, 20.0)),
        RecognizedFragment::new("G", Quad::from_rect(400.0, 600.0, 12.0, 20.0)),
    ];
    let config = EngineConfig::default();
    let page = classify_page(&fragments, PageGeometry::new(1000.0, 2000.0), &config.classifier).unwrap();

    let mut overlay = ChordOverlay::new(config);
    overlay.ingest_page(0, page);
    assert_eq!(overlay.estimate_key().as_deref(), Some("G"));

    overlay.set_transposition(TranspositionState::new(-7, AccidentalStyle::Auto));
    assert_eq!(overlay.displayed_key().as_deref(), Some("C"));

    let badges = layout_badges(&overlay.merged_tokens(0), 500.0, 1000.0);
    let labels: Vec<&str> = badges.iter().map(|b| b.text.as_str()).collect();
    assert_eq!(labels, vec!["C", "F", "G", "C"]);
    assert!((badges[0].x - 50.0).abs() < 1e-3);
    assert!((badges[0].y - 100.0).abs() < 1e-3);
}
