//! # Style Presets
//!
//! A style is a named bundle of six numbers that drive the transform pipeline:
//! three multiplicative color parameters, a warmth bias, and the strengths of
//! the vignette and sharpen passes.
//!
//! ## Built-in Presets
//!
//! | key | contrast | brightness | saturation | warmth | vignette | sharpen |
//! |---|---|---|---|---|---|---|
//! | editorial | 1.3 | 1.05 | 0.85 | 0 | 0.2 | 0.3 |
//! | glamour | 1.15 | 1.15 | 1.3 | 0.15 | 0.1 | 0.1 |
//! | avant-garde | 1.4 | 0.95 | 1.4 | -0.1 | 0.25 | 0.4 |
//! | minimalist | 1.08 | 1.0 | 0.7 | 0.05 | 0.05 | 0 |
//! | beach | 1.05 | 1.45 | 1.8 | 0.45 | 0.01 | 0.1 |
//!
//! ## Usage
//!
//! ```rust
//! use styleforge::styles::PresetRegistry;
//!
//! let registry = PresetRegistry::new();
//! let editorial = registry.get("editorial").unwrap();
//! assert_eq!(editorial.contrast, 1.3);
//! assert!(registry.get("foo").is_err());
//! ```

pub mod preset;
pub mod registry;

pub use preset::StylePreset;
pub use registry::{PresetRegistry, DEFAULT_STYLE};
