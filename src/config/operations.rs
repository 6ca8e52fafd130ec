//! Config loading, validation, and path helpers.

use super::model::Config;
use crate::error::{LockstampError, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            LockstampError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| LockstampError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            LockstampError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `stamp_suffix` must be non-empty and must not contain a path separator
    /// - `log_filter` must parse as a tracing filter directive
    pub fn validate(&self) -> Result<()> {
        if self.stamp_suffix.is_empty() {
            return Err(LockstampError::ConfigError(
                "config validation failed: stamp_suffix must be non-empty".to_string(),
            ));
        }

        if self.stamp_suffix.contains(['/', '\\']) {
            return Err(LockstampError::ConfigError(format!(
                "config validation failed: stamp_suffix must not contain a path separator (found '{}')",
                self.stamp_suffix
            )));
        }

        EnvFilter::try_new(&self.log_filter).map_err(|e| {
            LockstampError::ConfigError(format!(
                "config validation failed: invalid log_filter '{}': {}",
                self.log_filter, e
            ))
        })?;

        Ok(())
    }

    /// Path of the sentinel file paired with `data_path`.
    pub fn sentinel_for(&self, data_path: &Path) -> PathBuf {
        let mut name = OsString::from(data_path.as_os_str());
        name.push(&self.stamp_suffix);
        PathBuf::from(name)
    }
}
