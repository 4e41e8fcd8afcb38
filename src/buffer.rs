//! Decoded RGBA pixel grid handed over by an image loader.

use image::{DynamicImage, RgbaImage};

use crate::{ColorError, Result};

/// Red, green, blue, alpha.
pub const BYTES_PER_PIXEL: usize = 4;

/// A row-major RGBA8 buffer whose length is always `width * height * 4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw RGBA bytes, rejecting a length that does not match the dimensions.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL));
        match expected {
            Some(expected) if expected == data.len() => Ok(Self { width, height, data }),
            _ => Err(ColorError::acquisition_message(format!(
                "pixel buffer of {} bytes does not describe a {width}x{height} RGBA image",
                data.len()
            ))),
        }
    }

    /// Convert any decoded image to RGBA8.
    pub fn from_image(img: &DynamicImage) -> Self {
        img.to_rgba8().into()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.data.len() / BYTES_PER_PIXEL
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

impl From<RgbaImage> for PixelBuffer {
    fn from(img: RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            data: img.into_raw(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn from_raw_checks_length() {
        let buf = PixelBuffer::from_raw(2, 1, vec![0; 8]).unwrap();
        assert_eq!(buf.pixel_count(), 2);
        assert_eq!((buf.width(), buf.height()), (2, 1));

        let err = PixelBuffer::from_raw(2, 2, vec![0; 8]).unwrap_err();
        assert!(err.is_acquisition());
    }

    #[test]
    fn zero_sized_image_is_valid_and_empty() {
        let buf = PixelBuffer::from_raw(0, 10, Vec::new()).unwrap();
        assert!(buf.is_empty());
        assert_eq!(buf.pixel_count(), 0);
    }

    #[test]
    fn from_image_converts_to_rgba() {
        let rgb = image::RgbImage::from_pixel(3, 2, image::Rgb([10, 20, 30]));
        let buf = PixelBuffer::from_image(&DynamicImage::ImageRgb8(rgb));
        assert_eq!(buf.pixel_count(), 6);
        assert_eq!(&buf.as_bytes()[..4], &[10, 20, 30, 255]);

        let rgba = RgbaImage::from_pixel(1, 1, Rgba([1, 2, 3, 4]));
        assert_eq!(PixelBuffer::from(rgba).into_raw(), vec![1, 2, 3, 4]);
    }
}
