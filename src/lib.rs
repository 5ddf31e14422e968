//! # StyleForge
//!
//! Apply fashion-style color grading, vignette and sharpening presets to images,
//! entirely offline.
//!
//! This library provides the pixel pipeline behind the `styleforge` CLI: a
//! decoded RGBA buffer goes in, a preset is applied, and a buffer of the same
//! size comes out.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use styleforge::{
//!     config::Config,
//!     engine::{LogProgress, StyleEngine},
//!     io::{ImageEncoder, ImageLoader},
//! };
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let config = Config::default();
//! let engine = StyleEngine::new(&config)?;
//!
//! let input = ImageLoader::new().load("model.jpg").await?;
//! let output = engine.transform_by_key(input, "editorial", Some(&LogProgress))?;
//! ImageEncoder::new().save(&output, "model_styleforge_editorial.png").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`buffer`] - Validated RGBA pixel buffers
//! - [`styles`] - Style presets and the preset registry
//! - [`effects`] - Color, vignette and sharpen passes
//! - [`engine`] - Runs the passes in order and reports progress
//! - [`io`] - Decoding input files and encoding results
//! - [`config`] - Configuration management
//!
//! ## Custom Presets
//!
//! Presets can be registered at runtime or declared in the TOML config:
//!
//! ```rust
//! use styleforge::styles::{PresetRegistry, StylePreset};
//!
//! let mut registry = PresetRegistry::new();
//! registry
//!     .register("noir", StylePreset { saturation: 0.0, vignette: 0.4, ..StylePreset::neutral("Noir") })
//!     .unwrap();
//! assert!(registry.has_preset("noir"));
//! ```

pub mod buffer;
pub mod config;
pub mod effects;
pub mod engine;
pub mod error;
pub mod io;
pub mod styles;

// Re-export commonly used types for convenience
pub use crate::{
    buffer::PixelBuffer,
    config::Config,
    engine::{ProgressSink, StyleEngine, VarianceSource},
    error::{Result, StyleForgeError},
    styles::{PresetRegistry, StylePreset},
};
