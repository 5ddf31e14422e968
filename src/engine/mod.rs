//! # Style Engine
//!
//! Turns a decoded pixel buffer and a style preset into a stylized buffer of
//! the same size.
//!
//! ```rust
//! use styleforge::{buffer::PixelBuffer, config::Config, engine::StyleEngine};
//!
//! # fn main() -> styleforge::Result<()> {
//! let engine = StyleEngine::new(&Config::default())?;
//! let input = PixelBuffer::filled(4, 4, [200, 180, 160, 255])?;
//! let output = engine.transform_by_key(input, "editorial", None)?;
//! assert_eq!(output.width(), 4);
//! # Ok(())
//! # }
//! ```

pub mod progress;
pub mod style_engine;
pub mod variance;

pub use progress::{LogProgress, ProgressSink, Stage, StageStatus};
pub use style_engine::StyleEngine;
pub use variance::{VarianceSource, MAX_VARIANCE};
