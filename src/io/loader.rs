use std::path::Path;

use image::ImageFormat;
use tracing::{debug, warn};

use crate::{
    buffer::PixelBuffer,
    config::{LoaderConfig, DEFAULT_MAX_FILE_SIZE},
    error::{LoadError, Result},
};

/// Container formats accepted as input
pub const SUPPORTED_FORMATS: [ImageFormat; 3] = [ImageFormat::Png, ImageFormat::Jpeg, ImageFormat::WebP];

/// Decodes PNG, JPEG and WebP files into pixel buffers
///
/// The loader enforces the input limits (file size and container format)
/// before any decoding work happens.
#[derive(Debug, Clone)]
pub struct ImageLoader {
    max_file_size: usize,
}

impl ImageLoader {
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_MAX_FILE_SIZE)
    }

    pub fn with_limits(max_file_size: usize) -> Self {
        Self { max_file_size }
    }

    pub fn from_config(config: &LoaderConfig) -> Self {
        Self::with_limits(config.max_file_size)
    }

    pub fn max_file_size(&self) -> usize {
        self.max_file_size
    }

    /// Read and decode an image file
    pub async fn load<P: AsRef<Path>>(&self, path: P) -> Result<PixelBuffer> {
        let path = path.as_ref();

        let metadata = tokio::fs::metadata(path).await.map_err(|_| LoadError::ReadFailed {
            path: path.display().to_string(),
        })?;
        // Cheap early rejection before reading a huge file into memory
        if metadata.len() > self.max_file_size as u64 {
            return Err(LoadError::TooLarge {
                size: metadata.len() as usize,
                max: self.max_file_size,
            }
            .into());
        }

        let bytes = tokio::fs::read(path).await.map_err(|e| {
            warn!("Failed to read {:?}: {}", path, e);
            LoadError::ReadFailed {
                path: path.display().to_string(),
            }
        })?;

        self.load_bytes(&bytes)
    }

    /// Decode an in-memory image file
    pub fn load_bytes(&self, bytes: &[u8]) -> Result<PixelBuffer> {
        if bytes.len() > self.max_file_size {
            return Err(LoadError::TooLarge {
                size: bytes.len(),
                max: self.max_file_size,
            }
            .into());
        }

        let format = Self::detect_format(bytes)?;
        debug!("Decoding {} byte {} image", bytes.len(), mime_type(format));

        let decoded = image::load_from_memory_with_format(bytes, format).map_err(|e| {
            LoadError::DecodingFailed {
                reason: e.to_string(),
            }
        })?;

        Ok(PixelBuffer::from_image(decoded.into_rgba8())?)
    }

    /// Sniff the container format from the file's magic bytes
    pub fn detect_format(bytes: &[u8]) -> Result<ImageFormat> {
        let format = image::guess_format(bytes).map_err(|_| LoadError::UnsupportedFormat {
            format: "unknown".to_string(),
        })?;

        if !Self::is_format_supported(format) {
            return Err(LoadError::UnsupportedFormat {
                format: format!("{:?}", format).to_lowercase(),
            }
            .into());
        }

        Ok(format)
    }

    pub fn is_format_supported(format: ImageFormat) -> bool {
        SUPPORTED_FORMATS.contains(&format)
    }
}

impl Default for ImageLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// MIME type for a supported container format
pub fn mime_type(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Png => "image/png",
        ImageFormat::Jpeg => "image/jpeg",
        ImageFormat::WebP => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::ImageEncoder;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn png_bytes() -> Vec<u8> {
        let mut buffer = PixelBuffer::filled(3, 2, [10, 20, 30, 255]).unwrap();
        buffer.set_pixel(2, 1, [200, 100, 50, 128]);
        ImageEncoder::new().encode_png(&buffer).unwrap()
    }

    #[test]
    fn test_png_decodes() {
        let buffer = ImageLoader::new().load_bytes(&png_bytes()).unwrap();

        assert_eq!(buffer.width(), 3);
        assert_eq!(buffer.height(), 2);
        assert_eq!(buffer.get_pixel(0, 0), [10, 20, 30, 255]);
        assert_eq!(buffer.get_pixel(2, 1), [200, 100, 50, 128]);
    }

    #[test]
    fn test_jpeg_is_supported() {
        let image = image::RgbImage::from_pixel(4, 4, image::Rgb([90, 90, 90]));
        let mut bytes = Cursor::new(Vec::new());
        image.write_to(&mut bytes, ImageFormat::Jpeg).unwrap();

        let buffer = ImageLoader::new().load_bytes(bytes.get_ref()).unwrap();
        assert_eq!(buffer.width(), 4);
        assert_eq!(buffer.get_pixel(1, 1)[3], 255);
    }

    #[test]
    fn test_unknown_bytes_rejected() {
        let err = ImageLoader::new().load_bytes(b"definitely not an image").unwrap_err();
        assert!(matches!(
            err,
            crate::error::StyleForgeError::Load(LoadError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_unsupported_container_rejected() {
        // A GIF header sniffs fine but is not an accepted input format
        let err = ImageLoader::new().load_bytes(b"GIF89a\x01\x00\x01\x00").unwrap_err();
        assert!(matches!(
            err,
            crate::error::StyleForgeError::Load(LoadError::UnsupportedFormat { ref format }) if format == "gif"
        ));
    }

    #[test]
    fn test_size_limit() {
        let bytes = png_bytes();
        let err = ImageLoader::with_limits(8).load_bytes(&bytes).unwrap_err();
        assert!(matches!(
            err,
            crate::error::StyleForgeError::Load(LoadError::TooLarge { max: 8, .. })
        ));
    }

    #[test]
    fn test_mime_types() {
        assert_eq!(mime_type(ImageFormat::Png), "image/png");
        assert_eq!(mime_type(ImageFormat::Jpeg), "image/jpeg");
        assert_eq!(mime_type(ImageFormat::WebP), "image/webp");
        assert!(!ImageLoader::is_format_supported(ImageFormat::Gif));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.png");
        std::fs::write(&path, png_bytes()).unwrap();

        let buffer = ImageLoader::new().load(&path).await.unwrap();
        assert_eq!(buffer.get_pixel(1, 0), [10, 20, 30, 255]);
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = ImageLoader::new().load(dir.path().join("missing.png")).await.unwrap_err();
        assert!(err.is_recoverable());
    }
}
