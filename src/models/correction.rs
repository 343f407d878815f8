use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrectionKind {
    /// Place a chord the classifier missed
    Add,
    /// Hide a detected chord near the given position
    Remove,
}

/// A user edit layered over detected chords
///
/// Corrections are document-wide and carry their page index; they are
/// filtered per page when tokens are merged for rendering. A `Remove`
/// never deletes a token, it only hides detected tokens near it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Correction {
    pub id: Uuid,
    pub kind: CorrectionKind,
    pub x_pct: f32,
    pub y_pct: f32,
    /// Chord text for `Add`; the hidden chord's text for `Remove` (informational)
    #[serde(default)]
    pub text: String,
    pub page_index: usize,
}

impl Correction {
    pub fn add(page_index: usize, x_pct: f32, y_pct: f32, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: CorrectionKind::Add,
            x_pct,
            y_pct,
            text: text.into(),
            page_index,
        }
    }

    pub fn remove(page_index: usize, x_pct: f32, y_pct: f32, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: CorrectionKind::Remove,
            x_pct,
            y_pct,
            text: text.into(),
            page_index,
        }
    }

    /// Whether (x_pct, y_pct) lies within the tolerance box around this correction
    pub fn is_near(&self, x_pct: f32, y_pct: f32, tol_x: f32, tol_y: f32) -> bool {
        (self.x_pct - x_pct).abs() <= tol_x && (self.y_pct - y_pct).abs() <= tol_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_assign_unique_ids() {
        let a = Correction::add(0, 1.0, 2.0, "G");
        let b = Correction::remove(0, 1.0, 2.0, "G");
        assert_ne!(a.id, b.id);
        assert_eq!(a.kind, CorrectionKind::Add);
        assert_eq!(b.kind, CorrectionKind::Remove);
    }

    #[test]
    fn test_is_near() {
        let c = Correction::remove(0, 10.5, 10.2, "");
        assert!(c.is_near(10.0, 10.0, 1.5, 1.0));
        assert!(!c.is_near(14.0, 10.0, 1.5, 1.0));
        assert!(!c.is_near(10.0, 12.0, 1.5, 1.0));
    }

    #[test]
    fn test_serde_kind_lowercase() {
        let c = Correction::add(2, 1.0, 2.0, "Am");
        let json = serde_json::to_string(&c).unwrap();
        assert!(json.contains("\"kind\":\"add\""));
        let back: Correction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
