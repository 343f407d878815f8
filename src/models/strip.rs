use serde::{Deserialize, Serialize};

/// Opaque identifier of a strip within one page scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StripId(pub u32);

/// A horizontal band cropped out of a page as a candidate chord line
///
/// `top_y` and `height` describe the detected ink band on the original page
/// (before padding and downscaling). `crop_top` and `scale` describe how the
/// PNG in `cropped_image` relates to page pixels, so recognizer output can be
/// mapped back onto the page.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChordStrip {
    pub id: StripId,
    pub top_y: u32,
    pub height: u32,

    /// First page row included in the crop (band top minus padding, clamped)
    pub crop_top: u32,
    /// Page rows covered by the crop, before downscaling
    pub crop_height: u32,
    /// Downscale factor applied to the crop (1.0 when not downscaled)
    pub scale: f32,

    pub image_width: u32,
    pub image_height: u32,
    /// PNG-encoded crop sent to the recognizer
    pub cropped_image: Vec<u8>,
}

impl ChordStrip {
    /// Map a point in strip-image pixels to page pixels
    pub fn to_page_point(&self, x: f32, y: f32) -> (f32, f32) {
        let scale = if self.scale > 0.0 { self.scale } else { 1.0 };
        (x / scale, self.crop_top as f32 + y / scale)
    }
}
