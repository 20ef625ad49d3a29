use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::ColorPolicy;
use crate::error::ConfigError;

/// Environment variable naming the config file for [`ToneConfig::load_from_env`]
pub const CONFIG_ENV_VAR: &str = "BGTONE_CONFIG";

/// Configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct ToneConfig {
    /// Fallback colors and classification tuning
    #[serde(default)]
    pub policy: ColorPolicy,

    /// Designated context settings
    #[serde(default)]
    pub dispatch: DispatchConfig,
}

/// Settings for the designated context and the blocking handoff
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DispatchConfig {
    /// How long a caller waits for the designated context before
    /// falling back to the undetermined classification. Must be non-zero.
    #[serde(default = "default_wait_timeout_ms")]
    pub wait_timeout_ms: u64,

    /// Thread name of the designated context
    #[serde(default = "default_context_name")]
    pub context_name: String,
}

fn default_wait_timeout_ms() -> u64 {
    5000
}

fn default_context_name() -> String {
    "bgtone-designated".to_string()
}

impl DispatchConfig {
    pub fn wait_timeout(&self) -> Duration {
        Duration::from_millis(self.wait_timeout_ms)
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            wait_timeout_ms: default_wait_timeout_ms(),
            context_name: default_context_name(),
        }
    }
}

impl ToneConfig {
    /// Parse and validate configuration from YAML
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a file, using defaults when it cannot be read
    pub fn load_from_file(path: &Path) -> Self {
        match Self::from_file(path) {
            Ok(config) => {
                tracing::info!(
                    path = %path.display(),
                    strategy = ?config.policy.strategy,
                    scan_mode = ?config.policy.scan_mode,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Load configuration from the file named by `BGTONE_CONFIG`, if set
    pub fn load_from_env() -> Self {
        match std::env::var(CONFIG_ENV_VAR).ok().map(PathBuf::from) {
            Some(path) => Self::load_from_file(&path),
            None => {
                tracing::debug!("No config file configured, using defaults");
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.policy.luminance_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::InvalidThreshold {
                name: "luminance_threshold",
                value: threshold,
            });
        }

        let distance = self.policy.distance_threshold;
        if !distance.is_finite() || distance < 0.0 {
            return Err(ConfigError::InvalidThreshold {
                name: "distance_threshold",
                value: distance,
            });
        }

        if self.dispatch.wait_timeout_ms == 0 {
            return Err(ConfigError::InvalidThreshold {
                name: "wait_timeout_ms",
                value: 0.0,
            });
        }

        Ok(())
    }
}
