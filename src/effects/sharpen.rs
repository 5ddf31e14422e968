use rayon::prelude::*;

use crate::{
    buffer::{PixelBuffer, CHANNELS},
    effects::traits::{to_channel, Effect},
    error::Result,
    styles::StylePreset,
};

/// 3x3 cross-shaped sharpening convolution
///
/// ```text
///  0       -a       0
/// -a     1 + 4a    -a
///  0       -a       0
/// ```
///
/// Only interior pixels are convolved. The one-pixel border keeps the values it
/// had before this pass, so images narrower or shorter than three pixels come
/// out unchanged. Alpha is copied from the source pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct Sharpen {
    pub amount: f64,
}

impl Sharpen {
    pub fn new(amount: f64) -> Self {
        Self { amount }
    }

    pub fn from_preset(preset: &StylePreset) -> Self {
        Self::new(preset.sharpen)
    }

    /// Kernel weights in row-major order
    pub fn kernel(&self) -> [f64; 9] {
        let a = self.amount;
        [
            0.0, -a, 0.0, //
            -a, 1.0 + 4.0 * a, -a, //
            0.0, -a, 0.0,
        ]
    }
}

impl Effect for Sharpen {
    fn name(&self) -> &str {
        "sharpen"
    }

    fn description(&self) -> &str {
        "Interior-only 3x3 sharpening convolution"
    }

    fn is_noop(&self) -> bool {
        self.amount <= 0.0
    }

    fn apply(&self, buffer: &mut PixelBuffer) -> Result<()> {
        let width = buffer.width() as usize;
        let height = buffer.height() as usize;

        if self.is_noop() || width < 3 || height < 3 {
            return Ok(());
        }

        let kernel = self.kernel();
        let stride = buffer.stride();
        // Every output pixel reads the pre-sharpen neighborhood
        let source = buffer.as_raw().to_vec();

        buffer
            .as_raw_mut()
            .par_chunks_mut(stride)
            .enumerate()
            .skip(1)
            .take(height - 2)
            .for_each(|(y, row)| {
                for x in 1..width - 1 {
                    let mut sum = [0.0f64; 3];

                    for ky in 0..3 {
                        let row_start = (y + ky - 1) * stride;
                        for kx in 0..3 {
                            let weight = kernel[ky * 3 + kx];
                            if weight == 0.0 {
                                continue;
                            }
                            let idx = row_start + (x + kx - 1) * CHANNELS;
                            for (c, acc) in sum.iter_mut().enumerate() {
                                *acc += source[idx + c] as f64 * weight;
                            }
                        }
                    }

                    let out = x * CHANNELS;
                    row[out] = to_channel(sum[0]);
                    row[out + 1] = to_channel(sum[1]);
                    row[out + 2] = to_channel(sum[2]);
                    row[out + 3] = source[y * stride + out + 3];
                }
            });

        Ok(())
    }
}
