//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Weight assumed for a criterion whose weight is absent or unreadable
pub const DEFAULT_MISSING_WEIGHT: f64 = 0.2;

/// Upper bound on proportional scaling passes
pub const DEFAULT_MAX_PASSES: u32 = 3;

/// Top-level kitrubric configuration (`kitrubric.toml`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KitConfig {
    /// Normalizer tuning
    #[serde(default)]
    pub normalizer: NormalizerConfig,
}

/// Settings consumed by the weight normalizer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Weight given to a missing or non-numeric raw weight, in [0, 1]
    #[serde(default = "default_missing_weight")]
    pub missing_weight: f64,

    /// Maximum number of scale-and-remainder passes (at least 1)
    #[serde(default = "default_max_passes")]
    pub max_passes: u32,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            missing_weight: default_missing_weight(),
            max_passes: default_max_passes(),
        }
    }
}

fn default_missing_weight() -> f64 {
    DEFAULT_MISSING_WEIGHT
}

fn default_max_passes() -> u32 {
    DEFAULT_MAX_PASSES
}
