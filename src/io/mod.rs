//! # Image I/O
//!
//! Adapters between files on disk and [`PixelBuffer`](crate::buffer::PixelBuffer)s.
//! The transform engine never sees container formats; decoding happens here on
//! the way in and PNG encoding on the way out.

pub mod encoder;
pub mod loader;

pub use encoder::{output_file_name, output_path, ImageEncoder};
pub use loader::{mime_type, ImageLoader, SUPPORTED_FORMATS};
