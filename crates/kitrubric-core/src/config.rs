//! Configuration for kitrubric
//!
//! Configuration lives in `kitrubric.toml`. Every key is optional; an absent
//! file means defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{KitError, Result};

pub use types::{KitConfig, NormalizerConfig, DEFAULT_MAX_PASSES, DEFAULT_MISSING_WEIGHT};

/// File name looked up in the working directory when no path is given
pub const CONFIG_FILE_NAME: &str = "kitrubric.toml";

impl KitConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| KitError::io_operation("read config", path.display(), e))?;
        let config: KitConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve configuration: explicit path, then `kitrubric.toml` under `root`, then defaults
    ///
    /// An explicit path that does not exist is an error; a missing default file is not.
    pub fn discover(explicit: Option<&Path>, root: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(KitError::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            debug!(path = %path.display(), "load_config");
            return Self::load(path);
        }

        let candidate: PathBuf = root.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            debug!(path = %candidate.display(), "load_config");
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Reject settings the normalizer cannot honor
    pub fn validate(&self) -> Result<()> {
        self.normalizer.validate()
    }
}

impl NormalizerConfig {
    /// Reject settings the normalizer cannot honor
    pub fn validate(&self) -> Result<()> {
        let missing = self.missing_weight;
        if !missing.is_finite() || !(0.0..=1.0).contains(&missing) {
            return Err(KitError::invalid_value("missing_weight", missing));
        }
        if self.max_passes == 0 {
            return Err(KitError::invalid_value("max_passes", self.max_passes));
        }
        Ok(())
    }

    /// Copy with a different missing-weight default
    pub fn with_missing_weight(mut self, missing_weight: f64) -> Self {
        self.missing_weight = missing_weight;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = KitConfig::default();
        assert_eq!(config.normalizer.missing_weight, 0.2);
        assert_eq!(config.normalizer.max_passes, 3);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: KitConfig = toml::from_str("[normalizer]\nmissing_weight = 0.1\n").unwrap();
        assert_eq!(config.normalizer.missing_weight, 0.1);
        assert_eq!(config.normalizer.max_passes, DEFAULT_MAX_PASSES);
    }

    #[test]
    fn test_load_full_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            "[normalizer]\nmissing_weight = 0.25\nmax_passes = 5\n",
        )
        .unwrap();

        let loaded = KitConfig::load(&path).unwrap();
        assert_eq!(
            loaded,
            KitConfig {
                normalizer: NormalizerConfig {
                    missing_weight: 0.25,
                    max_passes: 5,
                },
            }
        );
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[normalizer]\nmax_passes = 0\n").unwrap();

        let err = KitConfig::load(&path).unwrap_err();
        assert!(matches!(err, KitError::InvalidValue { .. }));
    }

    #[test]
    fn test_discover_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let config = KitConfig::discover(None, dir.path()).unwrap();
        assert_eq!(config, KitConfig::default());
    }

    #[test]
    fn test_discover_finds_file_in_root() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[normalizer]\nmax_passes = 7\n",
        )
        .unwrap();

        let config = KitConfig::discover(None, dir.path()).unwrap();
        assert_eq!(config.normalizer.max_passes, 7);
    }

    #[test]
    fn test_discover_explicit_missing_path() {
        let dir = tempdir().unwrap();
        let err = KitConfig::discover(Some(&dir.path().join("nope.toml")), dir.path())
            .unwrap_err();
        assert!(matches!(err, KitError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_validate_rejects_out_of_range_missing_weight() {
        let config = NormalizerConfig::default().with_missing_weight(1.5);
        assert!(matches!(
            config.validate(),
            Err(KitError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_passes() {
        let config = NormalizerConfig {
            max_passes: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
