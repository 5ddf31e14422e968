use rayon::prelude::*;

use crate::{
    buffer::{PixelBuffer, CHANNELS},
    effects::traits::{to_channel, Effect},
    error::Result,
    styles::StylePreset,
};

/// Outer gradient radius as a fraction of the longer image side
const RADIUS_FACTOR: f64 = 0.7;

/// Radial darkening composited over the image
///
/// The overlay is black, fully transparent at the image center and reaching
/// `strength` opacity at `0.7 * max(width, height)`. It is blended
/// source-over into RGB; alpha is left as it was.
#[derive(Debug, Clone, PartialEq)]
pub struct Vignette {
    pub strength: f64,
}

impl Vignette {
    pub fn new(strength: f64) -> Self {
        Self { strength }
    }

    pub fn from_preset(preset: &StylePreset) -> Self {
        Self::new(preset.vignette)
    }

    /// Overlay opacity at a distance from the center
    fn opacity_at(&self, distance: f64, radius: f64) -> f64 {
        self.strength * (distance / radius).min(1.0)
    }
}

impl Effect for Vignette {
    fn name(&self) -> &str {
        "vignette"
    }

    fn description(&self) -> &str {
        "Radial black gradient composited over the whole image"
    }

    fn is_noop(&self) -> bool {
        self.strength <= 0.0
    }

    fn apply(&self, buffer: &mut PixelBuffer) -> Result<()> {
        if self.is_noop() {
            return Ok(());
        }

        let width = buffer.width() as f64;
        let height = buffer.height() as f64;
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        let radius = width.max(height) * RADIUS_FACTOR;
        let stride = buffer.stride();

        buffer
            .as_raw_mut()
            .par_chunks_mut(stride)
            .enumerate()
            .for_each(|(y, row)| {
                // Distances are measured from pixel centers
                let dy = y as f64 + 0.5 - center_y;
                for (x, pixel) in row.chunks_exact_mut(CHANNELS).enumerate() {
                    let dx = x as f64 + 0.5 - center_x;
                    let alpha = self.opacity_at((dx * dx + dy * dy).sqrt(), radius);
                    let keep = 1.0 - alpha;

                    for channel in &mut pixel[..3] {
                        *channel = to_channel(*channel as f64 * keep);
                    }
                }
            });

        Ok(())
    }
}
