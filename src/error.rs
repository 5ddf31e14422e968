use thiserror::Error;

/// Main error type for the StyleForge library
#[derive(Error, Debug)]
pub enum StyleForgeError {
    #[error("Pixel buffer error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Preset error: {0}")]
    Preset(#[from] PresetError),

    #[error("Image loading error: {0}")]
    Load(#[from] LoadError),

    #[error("Image encoding error: {0}")]
    Encode(#[from] EncodeError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Generic error: {0}")]
    Generic(String),
}

/// Malformed pixel buffers handed to the engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Image dimensions must be positive, got {width}x{height}")]
    EmptyDimensions { width: u32, height: u32 },

    #[error("Pixel data length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Image dimensions {width}x{height} overflow addressable memory")]
    TooLarge { width: u32, height: u32 },
}

/// Style preset errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PresetError {
    #[error("Unknown style preset: {key}")]
    Unknown { key: String },

    #[error("Invalid preset parameter: {key}.{parameter} = {value}")]
    InvalidParameter {
        key: String,
        parameter: String,
        value: f64,
    },
}

/// Errors raised while reading and decoding an input image
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read image file: {path}")]
    ReadFailed { path: String },

    #[error("Image too large: {size} bytes (maximum {max} bytes)")]
    TooLarge { size: usize, max: usize },

    #[error("Unsupported image format: {format}")]
    UnsupportedFormat { format: String },

    #[error("Image decoding failed: {reason}")]
    DecodingFailed { reason: String },
}

/// Errors raised while encoding the output image
#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("Image encoding failed: {reason}")]
    EncodingFailed { reason: String },

    #[error("Failed to write output file: {path}")]
    WriteFailed { path: String },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration file: {path}")]
    ParseFailed { path: String },

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },
}

/// Convenience type alias for Results using StyleForgeError
pub type Result<T> = std::result::Result<T, StyleForgeError>;

impl StyleForgeError {
    /// Create a generic error with a custom message
    pub fn generic<S: Into<String>>(message: S) -> Self {
        Self::Generic(message.into())
    }

    /// Check if this error is recoverable (can be retried)
    pub fn is_recoverable(&self) -> bool {
        match self {
            // IO errors might be temporary
            Self::Io(_) => true,
            Self::Load(LoadError::ReadFailed { .. }) => true,
            Self::Encode(EncodeError::WriteFailed { .. }) => true,
            // Bad pixels and bad presets stay bad
            _ => false,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Load(LoadError::UnsupportedFormat { .. }) => {
                "Please upload a PNG, JPEG, or WebP image".to_string()
            }
            Self::Load(LoadError::TooLarge { max, .. }) => {
                format!("Image too large. Maximum size is {}MB", max / (1024 * 1024))
            }
            Self::Load(LoadError::ReadFailed { path }) => {
                format!("Failed to read image file '{}'", path)
            }
            Self::Preset(PresetError::Unknown { key }) => {
                format!("Style '{}' not found.", key)
            }
            Self::Config(ConfigError::FileNotFound { path }) => {
                format!("Configuration file '{}' not found.", path)
            }
            Self::Decode(_) => "Transformation failed. Please try again.".to_string(),
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_converts() {
        let err: StyleForgeError = DecodeError::EmptyDimensions { width: 0, height: 4 }.into();
        assert!(matches!(err, StyleForgeError::Decode(_)));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_user_messages() {
        let err: StyleForgeError = LoadError::TooLarge {
            size: 11 * 1024 * 1024,
            max: 10 * 1024 * 1024,
        }
        .into();
        assert_eq!(err.user_message(), "Image too large. Maximum size is 10MB");

        let err: StyleForgeError = PresetError::Unknown { key: "foo".to_string() }.into();
        assert_eq!(err.user_message(), "Style 'foo' not found.");
    }

    #[test]
    fn test_read_failures_are_recoverable() {
        let err: StyleForgeError = LoadError::ReadFailed { path: "a.png".to_string() }.into();
        assert!(err.is_recoverable());
    }
}
