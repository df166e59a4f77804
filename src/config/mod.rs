//! Bridge configuration
//!
//! JSON file-backed settings for the map bridge:
//! - Preferred map provider (tried before any generic handler)
//! - Fallback behavior when the preferred provider is not installed
//!
//! Writes are atomic (temp file + rename) and unknown fields in existing
//! config files are tolerated.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::launcher::ProviderId;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Bridge settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Preferred map application, tried before any generic handler
    #[serde(default)]
    pub preferred_provider: ProviderId,

    /// Whether to fall back to any capable handler when the preferred
    /// provider cannot be resolved
    #[serde(default = "default_fallback")]
    pub fallback_to_any: bool,
}

fn default_fallback() -> bool {
    true
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            preferred_provider: ProviderId::default(),
            fallback_to_any: true,
        }
    }
}

impl BridgeConfig {
    /// Load configuration from `path`. A missing file yields defaults.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Save configuration to `path` atomically.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(self)?)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

/// Default config file location under the platform config directory.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("map-bridge")
        .join("config.json")
}
