use crate::{buffer::PixelBuffer, error::Result};

/// A single pass of the transform pipeline
///
/// Effects are built from a preset before the run starts and are applied in
/// a fixed order, each consuming the full output of the previous one.
pub trait Effect: Send + Sync {
    /// Returns the unique name of this effect
    fn name(&self) -> &str;

    /// Returns a human-readable description of this effect
    fn description(&self) -> &str;

    /// Whether applying this effect would leave the buffer byte-for-byte unchanged
    ///
    /// The engine skips no-op effects entirely.
    fn is_noop(&self) -> bool {
        false
    }

    /// Apply the effect to the buffer in place
    ///
    /// Every channel written back is clamped to `[0, 255]`; alpha is never modified.
    fn apply(&self, buffer: &mut PixelBuffer) -> Result<()>;
}

/// Round half to even and saturate into a channel value, as 8-bit canvas storage does
#[inline]
pub(crate) fn to_channel(value: f64) -> u8 {
    value.round_ties_even().clamp(0.0, 255.0) as u8
}
