//! Row ink density and block detection

use crate::models::PageBitmap;

/// A run of consecutive ink rows on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InkBand {
    pub top: u32,
    pub height: u32,
}

/// Whether an RGBA pixel counts as ink
///
/// Fully transparent pixels are treated as paper; canvases rendered
/// without a background report them as black with zero alpha.
pub fn is_ink(pixel: &[u8], threshold: u8) -> bool {
    if pixel[3] == 0 {
        return false;
    }
    let sum = pixel[0] as u32 + pixel[1] as u32 + pixel[2] as u32;
    sum < threshold as u32 * 3
}

/// Count ink pixels in every row, top to bottom
pub fn row_profile(bitmap: &PageBitmap, ink_threshold: u8) -> Vec<usize> {
    (0..bitmap.height())
        .map(|y| {
            bitmap
                .row(y)
                .chunks_exact(4)
                .filter(|px| is_ink(px, ink_threshold))
                .count()
        })
        .collect()
}

/// Find runs of rows whose density exceeds `noise_threshold`
///
/// Runs shorter than `min_height` rows are dropped as specks.
pub fn find_bands(profile: &[usize], noise_threshold: usize, min_height: u32) -> Vec<InkBand> {
    let mut bands = Vec::new();
    let mut open: Option<u32> = None;

    let close = |top: u32, end: u32, bands: &mut Vec<InkBand>| {
        let height = end - top;
        if height >= min_height {
            bands.push(InkBand { top, height });
        }
    };

    for (y, &density) in profile.iter().enumerate() {
        let y = y as u32;
        if density > noise_threshold {
            if open.is_none() {
                open = Some(y);
            }
        } else if let Some(top) = open.take() {
            close(top, y, &mut bands);
        }
    }
    if let Some(top) = open {
        close(top, profile.len() as u32, &mut bands);
    }

    bands
}
