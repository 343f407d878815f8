//! Rendered page bitmap
//!
//! The document viewer owns the rendering; the engine only ever borrows
//! the pixels read-only.

use image::RgbaImage;

use crate::error::{EngineError, Result};

/// Immutable RGBA pixel grid for one rendered page
#[derive(Debug, Clone)]
pub struct PageBitmap {
    image: RgbaImage,
}

impl PageBitmap {
    /// Wrap a raw RGBA buffer (4 bytes per pixel, row-major)
    ///
    /// Fails with `InvalidInput` for zero dimensions or a buffer whose length
    /// does not match `width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(EngineError::invalid(format!(
                "bitmap has zero size ({}x{})",
                width, height
            )));
        }

        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(|| EngineError::invalid("bitmap dimensions overflow"))?;
        if data.len() != expected {
            return Err(EngineError::invalid(format!(
                "bitmap buffer is {} bytes, expected {} for {}x{} RGBA",
                data.len(),
                expected,
                width,
                height
            )));
        }

        let image = RgbaImage::from_raw(width, height, data)
            .ok_or_else(|| EngineError::invalid("bitmap buffer rejected"))?;
        Ok(Self { image })
    }

    /// Wrap an already-decoded image
    pub fn from_image(image: RgbaImage) -> Result<Self> {
        if image.width() == 0 || image.height() == 0 {
            return Err(EngineError::invalid("bitmap has zero size"));
        }
        Ok(Self { image })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Raw RGBA bytes of row `y`
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.image.width() as usize * 4;
        let start = y as usize * stride;
        &self.image.as_raw()[start..start + stride]
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgba() {
        let bitmap = PageBitmap::from_rgba(3, 2, vec![255; 24]).unwrap();
        assert_eq!(bitmap.width(), 3);
        assert_eq!(bitmap.height(), 2);
        assert_eq!(bitmap.row(1).len(), 12);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            PageBitmap::from_rgba(0, 10, vec![]),
            Err(EngineError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        assert!(matches!(
            PageBitmap::from_rgba(2, 2, vec![0; 15]),
            Err(EngineError::InvalidInput(_))
        ));
        assert!(matches!(
            PageBitmap::from_rgba(2, 2, vec![0; 17]),
            Err(EngineError::InvalidInput(_))
        ));
    }
}
