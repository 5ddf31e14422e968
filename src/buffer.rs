use image::{ImageBuffer, Rgba, RgbaImage};

use crate::error::DecodeError;

/// Bytes per RGBA pixel
pub const CHANNELS: usize = 4;

/// A decoded RGBA image owned by whichever stage currently holds it
///
/// This is a thin wrapper around an RGBA image buffer. Construction always
/// validates the dimensions against the data length, so every `PixelBuffer`
/// that exists is well formed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    buffer: RgbaImage,
}

impl PixelBuffer {
    /// Create a pixel buffer from raw RGBA bytes
    ///
    /// Fails if either dimension is zero or `data` is not exactly
    /// `width * height * 4` bytes long.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self, DecodeError> {
        let expected = Self::expected_len(width, height)?;
        if data.len() != expected {
            return Err(DecodeError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }

        ImageBuffer::from_raw(width, height, data)
            .map(|buffer| Self { buffer })
            .ok_or(DecodeError::TooLarge { width, height })
    }

    /// Wrap an already decoded RGBA image
    pub fn from_image(buffer: RgbaImage) -> Result<Self, DecodeError> {
        Self::expected_len(buffer.width(), buffer.height())?;
        Ok(Self { buffer })
    }

    /// Create a buffer with every pixel set to `color`
    pub fn filled(width: u32, height: u32, color: [u8; 4]) -> Result<Self, DecodeError> {
        Self::expected_len(width, height)?;
        let buffer = ImageBuffer::from_pixel(width, height, Rgba(color));
        Ok(Self { buffer })
    }

    fn expected_len(width: u32, height: u32) -> Result<usize, DecodeError> {
        if width == 0 || height == 0 {
            return Err(DecodeError::EmptyDimensions { width, height });
        }

        (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(CHANNELS))
            .ok_or(DecodeError::TooLarge { width, height })
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Number of bytes in one row of pixels
    pub fn stride(&self) -> usize {
        self.buffer.width() as usize * CHANNELS
    }

    /// Get a pixel at the given coordinates
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.buffer.get_pixel(x, y).0
    }

    /// Set a pixel at the given coordinates
    pub fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 4]) {
        self.buffer.put_pixel(x, y, Rgba(color));
    }

    /// Raw RGBA bytes, row-major
    pub fn as_raw(&self) -> &[u8] {
        self.buffer.as_raw()
    }

    /// Mutable raw RGBA bytes, row-major
    pub fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    /// Consume the buffer and return its raw RGBA bytes
    pub fn into_raw(self) -> Vec<u8> {
        self.buffer.into_raw()
    }

    /// Borrow the underlying image for encoding
    pub fn as_image(&self) -> &RgbaImage {
        &self.buffer
    }

    /// Consume the buffer and return the underlying image
    pub fn into_image(self) -> RgbaImage {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_width_is_rejected() {
        let err = PixelBuffer::from_raw(0, 4, Vec::new()).unwrap_err();
        assert_eq!(err, DecodeError::EmptyDimensions { width: 0, height: 4 });
    }

    #[test]
    fn test_zero_height_is_rejected() {
        assert!(PixelBuffer::filled(3, 0, [0, 0, 0, 255]).is_err());
    }

    #[test]
    fn test_length_mismatch() {
        let err = PixelBuffer::from_raw(2, 2, vec![0; 15]).unwrap_err();
        assert_eq!(err, DecodeError::LengthMismatch { expected: 16, actual: 15 });
    }

    #[test]
    fn test_pixel_access() {
        let mut buffer = PixelBuffer::filled(3, 2, [10, 20, 30, 40]).unwrap();
        assert_eq!(buffer.stride(), 12);
        assert_eq!(buffer.get_pixel(2, 1), [10, 20, 30, 40]);

        buffer.set_pixel(1, 1, [1, 2, 3, 4]);
        assert_eq!(buffer.get_pixel(1, 1), [1, 2, 3, 4]);
        assert_eq!(&buffer.as_raw()[16..20], &[1, 2, 3, 4]);
    }
}
