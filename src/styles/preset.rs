use serde::{Deserialize, Serialize};

use crate::error::PresetError;

/// A named bundle of the six numeric style parameters
///
/// Multiplicative parameters (`contrast`, `brightness`, `saturation`) are
/// neutral at `1.0`; additive and strength parameters (`warmth`, `vignette`,
/// `sharpen`) are neutral at `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StylePreset {
    /// Human-readable name
    pub name: String,

    /// Contrast multiplier (typically 0.7-1.5)
    pub contrast: f64,

    /// Brightness multiplier (typically 0.9-1.5)
    pub brightness: f64,

    /// Saturation multiplier (typically 0.5-2.0)
    pub saturation: f64,

    /// Color temperature bias, positive is warmer (typically -0.15 to 0.5)
    pub warmth: f64,

    /// Vignette opacity at the gradient edge (0.0 = none)
    pub vignette: f64,

    /// Sharpen kernel strength (0.0 = none)
    pub sharpen: f64,
}

impl StylePreset {
    /// A preset that leaves colors untouched and adds no vignette or sharpening
    pub fn neutral<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            contrast: 1.0,
            brightness: 1.0,
            saturation: 1.0,
            warmth: 0.0,
            vignette: 0.0,
            sharpen: 0.0,
        }
    }

    /// Check that every parameter is usable, reporting the first offender
    pub fn validate(&self, key: &str) -> Result<(), PresetError> {
        let checks: [(&str, f64, bool); 6] = [
            ("contrast", self.contrast, self.contrast >= 0.0),
            ("brightness", self.brightness, self.brightness >= 0.0),
            ("saturation", self.saturation, self.saturation >= 0.0),
            ("warmth", self.warmth, true),
            ("vignette", self.vignette, (0.0..=1.0).contains(&self.vignette)),
            ("sharpen", self.sharpen, self.sharpen >= 0.0),
        ];

        for (parameter, value, in_range) in checks {
            if !value.is_finite() || !in_range {
                return Err(PresetError::InvalidParameter {
                    key: key.to_string(),
                    parameter: parameter.to_string(),
                    value,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_preset_is_valid() {
        let preset = StylePreset::neutral("Neutral");
        assert!(preset.validate("neutral").is_ok());
    }

    #[test]
    fn test_vignette_out_of_range() {
        let mut preset = StylePreset::neutral("Dark");
        preset.vignette = 1.5;

        let err = preset.validate("dark").unwrap_err();
        assert_eq!(
            err,
            PresetError::InvalidParameter {
                key: "dark".to_string(),
                parameter: "vignette".to_string(),
                value: 1.5,
            }
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut preset = StylePreset::neutral("Broken");
        preset.warmth = f64::NAN;
        assert!(preset.validate("broken").is_err());
    }

    #[test]
    fn test_negative_sharpen_rejected() {
        let mut preset = StylePreset::neutral("Soft");
        preset.sharpen = -0.2;
        assert!(preset.validate("soft").is_err());
    }
}
