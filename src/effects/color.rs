use rayon::prelude::*;

use crate::{
    buffer::{PixelBuffer, CHANNELS},
    effects::traits::{to_channel, Effect},
    error::Result,
    styles::StylePreset,
};

/// Warmth is scaled into channel units by this factor
const WARMTH_SCALE: f64 = 30.0;

/// Luma weights used for the saturation pass
const LUMA_R: f64 = 0.2989;
const LUMA_G: f64 = 0.587;
const LUMA_B: f64 = 0.114;

/// Per-pixel color grading: warmth, brightness, contrast, then saturation
///
/// The four parameters already include the run's variance; it is added once
/// when the effect is built, never per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorAdjust {
    pub warmth: f64,
    pub brightness: f64,
    pub contrast: f64,
    pub saturation: f64,
}

impl ColorAdjust {
    /// Build the color pass for a preset, shifting every parameter by `variance`
    pub fn from_preset(preset: &StylePreset, variance: f64) -> Self {
        Self {
            warmth: preset.warmth + variance,
            brightness: preset.brightness + variance,
            contrast: preset.contrast + variance,
            saturation: preset.saturation + variance,
        }
    }

    /// Grade a single RGB triple
    ///
    /// The sub-steps must run in this order; the luma for saturation is taken
    /// from the warmed, brightened, contrasted values.
    pub fn adjust(&self, rgb: [u8; 3]) -> [u8; 3] {
        let mut r = rgb[0] as f64;
        let mut g = rgb[1] as f64;
        let mut b = rgb[2] as f64;

        // Warmth
        r += self.warmth * WARMTH_SCALE;
        b -= self.warmth * WARMTH_SCALE;

        // Brightness
        r *= self.brightness;
        g *= self.brightness;
        b *= self.brightness;

        // Contrast around mid-gray
        r = self.contrast_channel(r);
        g = self.contrast_channel(g);
        b = self.contrast_channel(b);

        // Saturation
        let gray = LUMA_R * r + LUMA_G * g + LUMA_B * b;
        r = gray + (r - gray) * self.saturation;
        g = gray + (g - gray) * self.saturation;
        b = gray + (b - gray) * self.saturation;

        [to_channel(r), to_channel(g), to_channel(b)]
    }

    #[inline]
    fn contrast_channel(&self, value: f64) -> f64 {
        ((value / 255.0 - 0.5) * self.contrast + 0.5) * 255.0
    }
}

impl Effect for ColorAdjust {
    fn name(&self) -> &str {
        "color-adjust"
    }

    fn description(&self) -> &str {
        "Warmth, brightness, contrast and saturation grading"
    }

    fn apply(&self, buffer: &mut PixelBuffer) -> Result<()> {
        let stride = buffer.stride();

        buffer
            .as_raw_mut()
            .par_chunks_mut(stride)
            .for_each(|row| {
                for pixel in row.chunks_exact_mut(CHANNELS) {
                    let [r, g, b] = self.adjust([pixel[0], pixel[1], pixel[2]]);
                    pixel[0] = r;
                    pixel[1] = g;
                    pixel[2] = b;
                }
            });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::PresetRegistry;

    #[test]
    fn test_neutral_is_identity() {
        let adjust = ColorAdjust::from_preset(&StylePreset::neutral("Neutral"), 0.0);

        for rgb in [[0, 0, 0], [255, 255, 255], [12, 200, 99], [128, 64, 32]] {
            assert_eq!(adjust.adjust(rgb), rgb);
        }
    }

    #[test]
    fn test_warmth_shifts_red_and_blue() {
        let preset = StylePreset { warmth: 0.5, ..StylePreset::neutral("Warm") };
        let adjust = ColorAdjust::from_preset(&preset, 0.0);

        assert_eq!(adjust.adjust([100, 100, 100]), [115, 100, 85]);
    }

    #[test]
    fn test_variance_shifts_every_parameter() {
        let preset = StylePreset::neutral("Neutral");
        let adjust = ColorAdjust::from_preset(&preset, 0.05);

        assert_eq!(adjust.warmth, 0.05);
        assert_eq!(adjust.brightness, 1.05);
        assert_eq!(adjust.contrast, 1.05);
        assert_eq!(adjust.saturation, 1.05);
    }

    #[test]
    fn test_zero_saturation_gives_gray() {
        let preset = StylePreset { saturation: 0.0, ..StylePreset::neutral("Mono") };
        let adjust = ColorAdjust::from_preset(&preset, 0.0);

        let [r, g, b] = adjust.adjust([200, 50, 10]);
        assert_eq!(r, g);
        assert_eq!(g, b);
    }

    #[test]
    fn test_uniform_input_gives_uniform_output() {
        let registry = PresetRegistry::new();

        for key in registry.keys() {
            let preset = registry.get(&key).unwrap();
            let mut buffer = PixelBuffer::filled(7, 5, [90, 140, 210, 200]).unwrap();
            ColorAdjust::from_preset(preset, 0.03).apply(&mut buffer).unwrap();

            let first = buffer.get_pixel(0, 0);
            assert!(buffer.as_raw().chunks_exact(4).all(|p| p == first), "{}", key);
            assert_eq!(first[3], 200);
        }
    }

    #[test]
    fn test_editorial_known_values() {
        let registry = PresetRegistry::new();
        let adjust = ColorAdjust::from_preset(registry.get("editorial").unwrap(), 0.0);

        // (106.59, 164.60, 222.62)
        assert_eq!(adjust.adjust([100, 150, 200]), [107, 165, 223]);
        // (19.69, 42.89, 66.10)
        assert_eq!(adjust.adjust([40, 60, 80]), [20, 43, 66]);
        // Mid-gray only moves through brightness: 136.47
        assert_eq!(adjust.adjust([128, 128, 128]), [136, 136, 136]);
    }

    #[test]
    fn test_avant_garde_known_values() {
        let registry = PresetRegistry::new();
        let adjust = ColorAdjust::from_preset(registry.get("avant-garde").unwrap(), 0.0);

        // (55.03, 153.72, 252.41)
        assert_eq!(adjust.adjust([100, 150, 200]), [55, 154, 252]);
        // Red clips at -11.76, blue cools to 73.89
        assert_eq!(adjust.adjust([40, 60, 80]), [0, 31, 74]);
        // Green lands at 171.4999908, just under the tie
        assert_eq!(adjust.adjust([222, 170, 98]), [255, 171, 43]);
    }

    #[test]
    fn test_glamour_known_values() {
        let registry = PresetRegistry::new();
        let adjust = ColorAdjust::from_preset(registry.get("glamour").unwrap(), 0.0);

        // (34.72, 61.36, 88.01)
        assert_eq!(adjust.adjust([40, 60, 80]), [35, 61, 88]);
        // (157.57, 149.83, 142.09): warmth tints neutral gray
        assert_eq!(adjust.adjust([128, 128, 128]), [158, 150, 142]);
    }

    #[test]
    fn test_variance_known_values() {
        let registry = PresetRegistry::new();
        let adjust = ColorAdjust::from_preset(registry.get("editorial").unwrap(), 0.05);

        // (111.97, 176.79, 241.61)
        assert_eq!(adjust.adjust([100, 150, 200]), [112, 177, 242]);
    }

    #[test]
    fn test_white_saturates_under_minimalist() {
        let registry = PresetRegistry::new();
        let adjust = ColorAdjust::from_preset(registry.get("minimalist").unwrap(), 0.0);

        assert_eq!(adjust.adjust([255, 255, 255]), [255, 255, 255]);
    }
}
