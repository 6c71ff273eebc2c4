//! Config loading, validation, and location.

use super::model::Config;
use crate::error::{PrenError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "PREN_CONFIG";

/// The config file location: `$PREN_CONFIG`, else `<config dir>/pren/config.yaml`.
///
/// Returns `None` when neither is available.
pub fn default_config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("pren").join("config.yaml"))
}

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(PrenError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PrenError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load the config from its default location.
    ///
    /// A missing file yields the defaults; an unreadable or invalid one is
    /// an error.
    pub fn load_default() -> Result<Self> {
        match default_config_path() {
            Some(path) if path.exists() => {
                debug!(path = %path.display(), "loading config");
                Self::load(path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document is null, which serde(default) does not cover.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| PrenError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| PrenError::UserError(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `max_depth` must be positive
    /// - `prompts_dir` must not be empty
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(PrenError::UserError(
                "config validation failed: max_depth must be greater than 0".to_string(),
            ));
        }

        if self.prompts_dir.as_os_str().is_empty() {
            return Err(PrenError::UserError(
                "config validation failed: prompts_dir must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
