use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::ImageOutputFormat;
use tracing::debug;

use crate::{
    buffer::PixelBuffer,
    config::OutputConfig,
    error::{EncodeError, Result},
};

/// Serializes finished pixel buffers as PNG
#[derive(Debug, Clone, Default)]
pub struct ImageEncoder;

impl ImageEncoder {
    pub fn new() -> Self {
        Self
    }

    /// Encode a buffer into PNG bytes
    pub fn encode_png(&self, buffer: &PixelBuffer) -> Result<Vec<u8>> {
        let mut bytes = Cursor::new(Vec::new());
        buffer
            .as_image()
            .write_to(&mut bytes, ImageOutputFormat::Png)
            .map_err(|e| EncodeError::EncodingFailed {
                reason: e.to_string(),
            })?;
        Ok(bytes.into_inner())
    }

    /// Encode a buffer and write it to `path`
    pub async fn save<P: AsRef<Path>>(&self, buffer: &PixelBuffer, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.encode_png(buffer)?;

        tokio::fs::write(path, &bytes)
            .await
            .map_err(|_| EncodeError::WriteFailed {
                path: path.display().to_string(),
            })?;

        debug!("Wrote {} bytes to {:?}", bytes.len(), path);
        Ok(())
    }
}

/// Download-style file name for a stylized image: `<stem>_<suffix>_<style>.png`
///
/// The original extension is dropped; a missing stem falls back to `image`.
pub fn output_file_name(original: &Path, suffix: &str, style_key: &str) -> String {
    let stem = original
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .unwrap_or("image");

    format!("{}_{}_{}.png", stem, suffix, style_key)
}

/// Full output path for an input, honouring the configured output directory
pub fn output_path(input: &Path, style_key: &str, config: &OutputConfig) -> PathBuf {
    let file_name = output_file_name(input, &config.suffix, style_key);
    let directory = config
        .directory
        .clone()
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_default();

    directory.join(file_name)
}
