//! Strip scanning
//!
//! Finds horizontal bands of ink on a rendered page and crops each into a
//! small PNG for the text recognizer. Whether a band holds chords or
//! lyrics is not decided here; density alone cannot tell them apart, so
//! that waits for the classifier.

pub mod density;

use std::io::Cursor;

use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::config::ScanConfig;
use crate::error::{EngineError, Result};
use crate::models::{ChordStrip, PageBitmap, StripId};

pub use density::{find_bands, row_profile, InkBand};

fn encode_png(image: RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(image)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| EngineError::Encode(e.to_string()))?;
    Ok(bytes)
}

/// Crop one band (plus padding) across the full page width
///
/// Crops taller than `max_strip_height` are downscaled with their aspect
/// ratio kept. The strip records the band's original position so
/// recognizer coordinates can be mapped back onto the page.
pub fn crop_strip(bitmap: &PageBitmap, band: InkBand, id: StripId, config: &ScanConfig) -> Result<ChordStrip> {
    let crop_top = band.top.saturating_sub(config.padding);
    let crop_bottom = band
        .top
        .saturating_add(band.height)
        .saturating_add(config.padding)
        .min(bitmap.height());
    let crop_height = crop_bottom - crop_top;
    let width = bitmap.width();

    let mut image = imageops::crop_imm(bitmap.image(), 0, crop_top, width, crop_height).to_image();
    let mut scale = 1.0f32;

    if crop_height > config.max_strip_height {
        scale = config.max_strip_height as f32 / crop_height as f32;
        let new_width = ((width as f32 * scale).round() as u32).max(1);
        image = imageops::resize(&image, new_width, config.max_strip_height, FilterType::Triangle);
    }

    let (image_width, image_height) = image.dimensions();
    let cropped_image = encode_png(image)?;

    Ok(ChordStrip {
        id,
        top_y: band.top,
        height: band.height,
        crop_top,
        crop_height,
        scale,
        image_width,
        image_height,
        cropped_image,
    })
}

/// Scan a page for candidate chord strips, top to bottom
///
/// A blank page yields no strips. Each call works from the bitmap alone,
/// so scanning the same page twice gives the same strips.
pub fn scan_page(bitmap: &PageBitmap, config: &ScanConfig) -> Result<Vec<ChordStrip>> {
    let profile = row_profile(bitmap, config.ink_threshold);
    let bands = find_bands(&profile, config.noise_threshold, config.min_block_height);

    log::debug!(
        "Density profile of {}x{} page: {} bands",
        bitmap.width(),
        bitmap.height(),
        bands.len()
    );

    let strips = bands
        .into_iter()
        .enumerate()
        .map(|(i, band)| crop_strip(bitmap, band, StripId(i as u32), config))
        .collect::<Result<Vec<_>>>()?;

    log::info!("Scanned page: {} chord strip candidates", strips.len());
    Ok(strips)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with_bands(width: u32, height: u32, bands: &[(u32, u32)]) -> PageBitmap {
        let mut data = vec![255u8; (width * height * 4) as usize];
        for &(top, h) in bands {
            for y in top..top + h {
                for x in 0..width / 2 {
                    let i = ((y * width + x) * 4) as usize;
                    data[i..i + 4].copy_from_slice(&[0, 0, 0, 255]);
                }
            }
        }
        PageBitmap::from_rgba(width, height, data).unwrap()
    }

    #[test]
    fn test_blank_page_has_no_strips() {
        let bitmap = page_with_bands(50, 80, &[]);
        assert!(scan_page(&bitmap, &ScanConfig::default()).unwrap().is_empty());
    }

    #[test]
    fn test_single_band() {
        let bitmap = page_with_bands(50, 100, &[(40, 20)]);
        let strips = scan_page(&bitmap, &ScanConfig::default()).unwrap();
        assert_eq!(strips.len(), 1);

        let strip = &strips[0];
        assert_eq!(strip.id, StripId(0));
        assert_eq!(strip.top_y, 40);
        assert_eq!(strip.height, 20);
        assert_eq!(strip.crop_top, 34);
        assert_eq!(strip.crop_height, 32);
        assert_eq!(strip.scale, 1.0);
        assert_eq!((strip.image_width, strip.image_height), (50, 32));
        assert_eq!(&strip.cropped_image[1..4], b"PNG");
    }

    #[test]
    fn test_padding_clamped_at_edges() {
        let bitmap = page_with_bands(20, 40, &[(2, 10), (32, 8)]);
        let strips = scan_page(&bitmap, &ScanConfig::default()).unwrap();
        assert_eq!(strips.len(), 2);
        assert_eq!(strips[0].crop_top, 0);
        assert_eq!(strips[0].crop_height, 18);
        assert_eq!(strips[1].crop_top, 26);
        assert_eq!(strips[1].crop_height, 14);
    }

    #[test]
    fn test_huge_padding_covers_the_page() {
        let config = ScanConfig {
            padding: u32::MAX,
            max_strip_height: 200,
            ..ScanConfig::default()
        };
        let bitmap = page_with_bands(50, 100, &[(40, 20)]);
        let strips = scan_page(&bitmap, &config).unwrap();
        assert_eq!(strips[0].crop_top, 0);
        assert_eq!(strips[0].crop_height, 100);
        assert_eq!(strips[0].top_y, 40);
    }

    #[test]
    fn test_tall_band_is_downscaled() {
        let config = ScanConfig {
            max_strip_height: 20,
            ..ScanConfig::default()
        };
        let bitmap = page_with_bands(100, 100, &[(20, 28)]);
        let strips = scan_page(&bitmap, &config).unwrap();
        let strip = &strips[0];
        assert_eq!(strip.crop_height, 40);
        assert_eq!(strip.image_height, 20);
        assert_eq!(strip.image_width, 50);
        assert_eq!(strip.scale, 0.5);
        assert_eq!(strip.top_y, 20);
        assert_eq!(strip.height, 28);
    }

    #[test]
    fn test_rescan_is_idempotent() {
        let bitmap = page_with_bands(30, 60, &[(10, 8), (30, 12)]);
        let first = scan_page(&bitmap, &ScanConfig::default()).unwrap();
        let second = scan_page(&bitmap, &ScanConfig::default()).unwrap();
        assert_eq!(first, second);
    }
}
