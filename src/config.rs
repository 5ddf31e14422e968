use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    engine::VarianceSource,
    error::{ConfigError, Result},
    styles::{PresetRegistry, StylePreset, DEFAULT_STYLE},
};

/// Largest input file accepted by default (10 MiB)
pub const DEFAULT_MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

/// Main configuration for StyleForge
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input image limits
    pub loader: LoaderConfig,

    /// Transform engine settings
    pub engine: EngineConfig,

    /// Output file settings
    pub output: OutputConfig,

    /// Additional presets, keyed by style name; these override built-ins
    pub presets: HashMap<String, StylePreset>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound { path: path.display().to_string() })?;

        let config: Config = toml::from_str(&content)
            .map_err(|_| ConfigError::ParseFailed { path: path.display().to_string() })?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::InvalidValue {
                key: "config".to_string(),
                value: e.to_string()
            })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.loader.validate()?;
        self.engine.validate()?;
        self.output.validate()?;

        // Custom presets are validated as they are registered
        let registry = PresetRegistry::new().with_custom(&self.presets)?;
        if !registry.has_preset(&self.engine.default_style) {
            return Err(ConfigError::InvalidValue {
                key: "engine.default_style".to_string(),
                value: self.engine.default_style.clone()
            }.into());
        }
        Ok(())
    }
}

/// Input image limits
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Maximum input file size in bytes
    pub max_file_size: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl LoaderConfig {
    fn validate(&self) -> Result<()> {
        if self.max_file_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "loader.max_file_size".to_string(),
                value: self.max_file_size.to_string()
            }.into());
        }
        Ok(())
    }
}

/// Transform engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of worker threads for the pixel passes
    pub processing_threads: usize,

    /// Style used when none is requested
    pub default_style: String,

    /// Source of the per-run jitter
    pub variance: VarianceSource,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            processing_threads: num_cpus::get(),
            default_style: DEFAULT_STYLE.to_string(),
            variance: VarianceSource::default(),
        }
    }
}

impl EngineConfig {
    fn validate(&self) -> Result<()> {
        if self.processing_threads == 0 {
            return Err(ConfigError::InvalidValue {
                key: "engine.processing_threads".to_string(),
                value: self.processing_threads.to_string()
            }.into());
        }

        self.variance.validate()?;
        Ok(())
    }
}

/// Output file configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for generated files; defaults to the input's directory
    pub directory: Option<PathBuf>,

    /// Tag inserted between the original name and the style key
    pub suffix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: None,
            suffix: "styleforge".to_string(),
        }
    }
}

impl OutputConfig {
    fn validate(&self) -> Result<()> {
        if self.suffix.is_empty() || self.suffix.contains(['/', '\\']) {
            return Err(ConfigError::InvalidValue {
                key: "output.suffix".to_string(),
                value: self.suffix.clone()
            }.into());
        }
        Ok(())
    }
}
