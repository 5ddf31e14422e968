use chrono::Utc;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Exclusive upper bound of a run's variance
pub const MAX_VARIANCE: f64 = 0.1;

/// Number of distinct variance steps, 0.000 to 0.099
const VARIANCE_STEPS: u32 = 100;

/// Where the per-run jitter comes from
///
/// The variance is a single scalar added to warmth, brightness, contrast and
/// saturation for a whole run. It is resolved once per transform and is
/// constant across every pixel of the image.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum VarianceSource {
    /// No jitter; output is fully deterministic
    #[default]
    None,

    /// A caller-chosen value in `[0, 0.1)`
    Fixed { value: f64 },

    /// A reproducible draw from a seeded generator
    Seeded { seed: u64 },

    /// Derived from the wall clock, so every run looks slightly different
    Clock,
}

impl VarianceSource {
    /// Produce the variance for one run
    pub fn resolve(&self) -> f64 {
        match *self {
            Self::None => 0.0,
            Self::Fixed { value } => value,
            Self::Seeded { seed } => {
                let mut rng = SmallRng::seed_from_u64(seed);
                rng.gen_range(0..VARIANCE_STEPS) as f64 / 1000.0
            }
            Self::Clock => {
                let millis = Utc::now().timestamp_millis();
                millis.rem_euclid(VARIANCE_STEPS as i64) as f64 / 1000.0
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Self::Fixed { value } = *self {
            if !(0.0..MAX_VARIANCE).contains(&value) {
                return Err(ConfigError::InvalidValue {
                    key: "engine.variance.value".to_string(),
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}
