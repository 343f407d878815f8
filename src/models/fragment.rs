//! Recognizer output: text fragments with quadrilateral positions

use serde::{Deserialize, Serialize};

use super::strip::StripId;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Four corner points, in the order the recognizer reports them
///
/// Only the axis-aligned extent is used; recognizers report slightly
/// rotated boxes for skewed scans and the bounding rectangle is enough.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
#[serde(transparent)]
pub struct Quad(pub [Point; 4]);

impl Quad {
    /// Axis-aligned rectangle as a quad (clockwise from top-left)
    pub fn from_rect(x: f32, y: f32, width: f32, height: f32) -> Self {
        Quad([
            Point::new(x, y),
            Point::new(x + width, y),
            Point::new(x + width, y + height),
            Point::new(x, y + height),
        ])
    }

    pub fn min_x(&self) -> f32 {
        self.0.iter().map(|p| p.x).fold(f32::INFINITY, f32::min)
    }

    pub fn max_x(&self) -> f32 {
        self.0.iter().map(|p| p.x).fold(f32::NEG_INFINITY, f32::max)
    }

    pub fn min_y(&self) -> f32 {
        self.0.iter().map(|p| p.y).fold(f32::INFINITY, f32::min)
    }

    pub fn max_y(&self) -> f32 {
        self.0.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max)
    }

    pub fn width(&self) -> f32 {
        self.max_x() - self.min_x()
    }

    pub fn height(&self) -> f32 {
        self.max_y() - self.min_y()
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|p| p.x.is_finite() && p.y.is_finite())
    }

    /// Bounding rectangle covering both quads
    pub fn union(&self, other: &Quad) -> Quad {
        let x0 = self.min_x().min(other.min_x());
        let y0 = self.min_y().min(other.min_y());
        let x1 = self.max_x().max(other.max_x());
        let y1 = self.max_y().max(other.max_y());
        Quad::from_rect(x0, y0, x1 - x0, y1 - y0)
    }

    /// Apply `f` to every corner
    pub fn map(&self, f: impl FnMut(Point) -> Point) -> Quad {
        Quad(self.0.map(f))
    }
}

/// One piece of recognized text and where it was found
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RecognizedFragment {
    pub text: String,
    pub quad: Quad,
}

impl RecognizedFragment {
    pub fn new(text: impl Into<String>, quad: Quad) -> Self {
        Self {
            text: text.into(),
            quad,
        }
    }
}

/// Recognizer response for a single submitted strip image
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StripRecognition {
    pub strip_id: StripId,
    #[serde(default)]
    pub fragments: Vec<RecognizedFragment>,
}

/// Page size in the same pixel space as the fragments
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
}

impl PageGeometry {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_extent() {
        let quad = Quad([
            Point::new(10.0, 5.0),
            Point::new(30.0, 6.0),
            Point::new(29.0, 20.0),
            Point::new(9.0, 19.0),
        ]);
        assert_eq!(quad.min_x(), 9.0);
        assert_eq!(quad.max_x(), 30.0);
        assert_eq!(quad.min_y(), 5.0);
        assert_eq!(quad.max_y(), 20.0);
        assert_eq!(quad.height(), 15.0);
    }

    #[test]
    fn test_quad_union() {
        let a = Quad::from_rect(0.0, 0.0, 10.0, 10.0);
        let b = Quad::from_rect(12.0, 2.0, 8.0, 10.0);
        let u = a.union(&b);
        assert_eq!((u.min_x(), u.min_y(), u.max_x(), u.max_y()), (0.0, 0.0, 20.0, 12.0));
    }

    #[test]
    fn test_quad_serializes_as_point_array() {
        let quad = Quad::from_rect(1.0, 2.0, 3.0, 4.0);
        let json = serde_json::to_string(&quad).unwrap();
        assert!(json.starts_with("[{\"x\":1.0,\"y\":2.0}"));
    }

    #[test]
    fn test_non_finite_quad() {
        let quad = Quad::from_rect(f32::NAN, 0.0, 1.0, 1.0);
        assert!(!quad.is_finite());
    }
}
