use std::collections::HashMap;

use crate::error::PresetError;
use crate::styles::StylePreset;

/// Key of the preset selected when the caller does not choose one
pub const DEFAULT_STYLE: &str = "editorial";

/// Registry of the available style presets
///
/// Presets are immutable once registered and are looked up by key. Asking for
/// a key that was never registered is a configuration error.
#[derive(Debug, Clone)]
pub struct PresetRegistry {
    presets: HashMap<String, StylePreset>,
}

impl PresetRegistry {
    /// Create a new registry with all built-in presets
    pub fn new() -> Self {
        let mut registry = Self {
            presets: HashMap::new(),
        };

        registry.register_builtin_presets();
        registry
    }

    /// Create a registry with no presets at all
    pub fn empty() -> Self {
        Self {
            presets: HashMap::new(),
        }
    }

    fn register_builtin_presets(&mut self) {
        let builtins = [
            ("editorial", preset("Editorial", 1.3, 1.05, 0.85, 0.0, 0.2, 0.3)),
            ("glamour", preset("Glamour", 1.15, 1.15, 1.3, 0.15, 0.1, 0.1)),
            ("avant-garde", preset("Avant-Garde", 1.4, 0.95, 1.4, -0.1, 0.25, 0.4)),
            ("minimalist", preset("Minimalist", 1.08, 1.0, 0.7, 0.05, 0.05, 0.0)),
            // Bright, sunlit: soft contrast, vivid color, almost no vignette
            ("beach", preset("Beach", 1.05, 1.45, 1.8, 0.45, 0.01, 0.1)),
        ];

        for (key, preset) in builtins {
            self.presets.insert(key.to_string(), preset);
        }
    }

    /// Register a custom preset, replacing any preset with the same key
    pub fn register<K: Into<String>>(&mut self, key: K, preset: StylePreset) -> Result<(), PresetError> {
        let key = key.into();
        preset.validate(&key)?;
        self.presets.insert(key, preset);
        Ok(())
    }

    /// Register every preset in `custom`, failing on the first invalid one
    pub fn with_custom(mut self, custom: &HashMap<String, StylePreset>) -> Result<Self, PresetError> {
        for (key, preset) in custom {
            self.register(key.clone(), preset.clone())?;
        }
        Ok(self)
    }

    /// Look up a preset by key
    pub fn get(&self, key: &str) -> Result<&StylePreset, PresetError> {
        self.presets.get(key).ok_or_else(|| PresetError::Unknown {
            key: key.to_string(),
        })
    }

    /// All registered keys, sorted
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.presets.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Check if a preset is available
    pub fn has_preset(&self, key: &str) -> bool {
        self.presets.contains_key(key)
    }

    /// Get the number of registered presets
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl Default for PresetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn preset(
    name: &str,
    contrast: f64,
    brightness: f64,
    saturation: f64,
    warmth: f64,
    vignette: f64,
    sharpen: f64,
) -> StylePreset {
    StylePreset {
        name: name.to_string(),
        contrast,
        brightness,
        saturation,
        warmth,
        vignette,
        sharpen,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_presets_available() {
        let registry = PresetRegistry::new();

        for key in ["editorial", "glamour", "avant-garde", "minimalist", "beach"] {
            assert!(registry.has_preset(key), "missing {}", key);
        }
        assert!(registry.has_preset(DEFAULT_STYLE));
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn test_builtin_values() {
        let registry = PresetRegistry::new();

        let beach = registry.get("beach").unwrap();
        assert_eq!(beach.name, "Beach");
        assert_eq!(beach.contrast, 1.05);
        assert_eq!(beach.brightness, 1.45);
        assert_eq!(beach.saturation, 1.8);
        assert_eq!(beach.warmth, 0.45);
        assert_eq!(beach.vignette, 0.01);
        assert_eq!(beach.sharpen, 0.1);

        let avant_garde = registry.get("avant-garde").unwrap();
        assert_eq!(avant_garde.warmth, -0.1);
        assert_eq!(avant_garde.sharpen, 0.4);

        assert_eq!(registry.get("minimalist").unwrap().sharpen, 0.0);
    }

    #[test]
    fn test_builtins_pass_validation() {
        let registry = PresetRegistry::new();
        for key in registry.keys() {
            assert!(registry.get(&key).unwrap().validate(&key).is_ok());
        }
    }

    #[test]
    fn test_unknown_preset() {
        let registry = PresetRegistry::new();
        let err = registry.get("foo").unwrap_err();
        assert_eq!(err, PresetError::Unknown { key: "foo".to_string() });
    }

    #[test]
    fn test_keys_are_sorted() {
        let registry = PresetRegistry::new();
        assert_eq!(
            registry.keys(),
            vec!["avant-garde", "beach", "editorial", "glamour", "minimalist"]
        );
    }

    #[test]
    fn test_custom_preset_registration() {
        let mut registry = PresetRegistry::new();
        registry
            .register("noir", StylePreset { saturation: 0.0, ..StylePreset::neutral("Noir") })
            .unwrap();

        assert!(registry.has_preset("noir"));
        assert_eq!(registry.len(), 6);
    }

    #[test]
    fn test_invalid_custom_preset_rejected() {
        let mut custom = HashMap::new();
        custom.insert(
            "broken".to_string(),
            StylePreset { vignette: -1.0, ..StylePreset::neutral("Broken") },
        );

        assert!(PresetRegistry::empty().with_custom(&custom).is_err());
    }
}
