//! # Effect Passes
//!
//! The three pixel passes a style is made of, applied in this order:
//!
//! - **Color**: warmth, brightness, contrast and saturation, per pixel
//! - **Vignette**: a radial black gradient composited over the image
//! - **Sharpen**: a 3x3 convolution over interior pixels
//!
//! Each pass is an [`Effect`] built from a [`StylePreset`](crate::styles::StylePreset).
//! The color and sharpen passes split rows across the current rayon pool.
//!
//! ```rust
//! use styleforge::buffer::PixelBuffer;
//! use styleforge::effects::{Effect, Sharpen};
//!
//! let mut buffer = PixelBuffer::filled(4, 4, [10, 20, 30, 255]).unwrap();
//! Sharpen::new(0.3).apply(&mut buffer).unwrap();
//! ```

pub mod color;
pub mod sharpen;
pub mod traits;
pub mod vignette;

pub use color::ColorAdjust;
pub use sharpen::Sharpen;
pub use traits::Effect;
pub use vignette::Vignette;
