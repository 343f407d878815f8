use chord_overlay_wasm::classify::classify_page;
use chord_overlay_wasm::config::ClassifierConfig;
use chord_overlay_wasm::models::{PageGeometry, Quad, RecognizedFragment};

/// Helper to create a fragment with a 20px tall box
fn frag(text: &str, x: f32, y: f32, w: f32) -> RecognizedFragment {
    RecognizedFragment::new(text, Quad::from_rect(x, y, w, 20.0))
}

fn classify(fragments: &[RecognizedFragment]) -> Vec<String> {
    let page = classify_page(fragments, PageGeometry::new(1200.0, 1600.0), &ClassifierConfig::default()).unwrap();
    page.accepted_tokens.into_iter().map(|t| t.text).collect()
}

#[test]
fn test_article_line_is_rejected() {
    let fragments = vec![frag("A", 100.0, 300.0, 12.0), frag("boy", 140.0, 300.0, 36.0)];
    assert!(classify(&fragments).is_empty());
}

#[test]
fn test_strong_chord_accepts_line() {
    let fragments = vec![frag("Am", 100.0, 300.0, 24.0), frag("boy", 150.0, 300.0, 36.0)];
    assert_eq!(classify(&fragments), vec!["Am"]);
}

#[test]
fn test_bare_a_line_is_accepted() {
    let fragments = vec![frag("A", 100.0, 300.0, 12.0)];
    assert_eq!(classify(&fragments), vec!["A"]);
}

#[test]
fn test_bare_a_beside_strong_chord_is_kept() {
    let fragments = vec![frag("A", 100.0, 300.0, 12.0), frag("E7", 200.0, 302.0, 20.0)];
    assert_eq!(classify(&fragments), vec!["A", "E7"]);
}

#[test]
fn test_split_symbol_is_repaired() {
    let fragments = vec![frag("F", 100.0, 300.0, 10.0), frag("#m7", 112.0, 301.0, 24.0)];
    assert_eq!(classify(&fragments), vec!["F#m7"]);
}

#[test]
fn test_distant_continuation_is_not_merged() {
    let fragments = vec![frag("F", 100.0, 300.0, 10.0), frag("m", 200.0, 300.0, 10.0)];
    // Too far to merge; "m" alone is not a chord and F keeps the line
    assert_eq!(classify(&fragments), vec!["F"]);
}

#[test]
fn test_chord_row_and_lyric_row_stay_apart() {
    let fragments = vec![
        frag("G", 100.0, 300.0, 12.0),
        frag("C", 300.0, 300.0, 12.0),
        frag("Amazing", 100.0, 326.0, 80.0),
        frag("grace", 300.0, 326.0, 60.0),
    ];
    assert_eq!(classify(&fragments), vec!["G", "C"]);
}

#[test]
fn test_fragments_in_any_order() {
    let fragments = vec![
        frag("D", 400.0, 700.0, 12.0),
        frag("Em", 100.0, 300.0, 24.0),
        frag("G", 100.0, 700.0, 12.0),
    ];
    assert_eq!(classify(&fragments), vec!["Em", "G", "D"]);
}

#[test]
fn test_key_votes() {
    let fragments = vec![
        frag("G", 100.0, 300.0, 12.0),
        frag("D/F#", 200.0, 300.0, 40.0),
        frag("Em7", 300.0, 300.0, 30.0),
        frag("G", 100.0, 500.0, 12.0),
    ];
    let page = classify_page(&fragments, PageGeometry::new(1200.0, 1600.0), &ClassifierConfig::default()).unwrap();
    assert_eq!(page.key_votes.get("G"), Some(&2));
    assert_eq!(page.key_votes.get("D"), Some(&1));
    assert_eq!(page.key_votes.get("E"), Some(&1));
    assert_eq!(page.key_votes.len(), 3);
}

#[test]
fn test_section_labels_are_rejected() {
    let fragments = vec![frag("Chorus:", 100.0, 300.0, 70.0)];
    assert!(classify(&fragments).is_empty());
}
