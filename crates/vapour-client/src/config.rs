//! Configuration management for the vapour dashboard.
//!
//! Configuration is stored as JSON in the platform's local config directory,
//! e.g. `$XDG_CONFIG_HOME/vapour/config.json` on Linux.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::format::SizeDisplay;
use crate::threshold::DEFAULT_LABEL_CUTOFF;

/// Where the backend listens when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable overriding the configured backend URL.
pub const BASE_URL_ENV: &str = "VAPOUR_API_BASE_URL";

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Root URL of the library backend.
    pub base_url: String,

    /// Games smaller than this many bytes get no chart label.
    pub label_cutoff_bytes: f64,

    /// How game sizes are shown in tables.
    pub size_display: SizeDisplay,

    /// Per-request timeout. Requests wait indefinitely when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            label_cutoff_bytes: DEFAULT_LABEL_CUTOFF,
            size_display: SizeDisplay::default(),
            request_timeout_secs: None,
        }
    }
}

impl Config {
    /// Load configuration from the local config directory.
    ///
    /// If the configuration file doesn't exist, a default configuration is
    /// created and written to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Unable to determine the local config directory
    /// - Unable to read or parse the config file
    /// - Unable to write the default config
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from_path(&config_path)
        } else {
            let config = Self::default();
            config.save_to_path(&config_path)?;
            Ok(config)
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to a specific path, creating parent directories.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Get the configuration file path.
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_local_dir()
            .context("No local config dir known for the current OS")?
            .join("vapour");

        Ok(config_dir.join("config.json"))
    }

    /// Pick the backend URL: an explicit override first, then
    /// [`BASE_URL_ENV`], then the configured value.
    #[must_use]
    pub fn resolve_base_url(&self, explicit: Option<&str>) -> String {
        let from_env = std::env::var(BASE_URL_ENV).ok();
        pick_base_url(explicit, from_env.as_deref(), &self.base_url)
    }

    /// The configured request timeout.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

fn pick_base_url(explicit: Option<&str>, from_env: Option<&str>, configured: &str) -> String {
    fn given(url: Option<&str>) -> Option<&str> {
        url.map(str::trim).filter(|url| !url.is_empty())
    }
    given(explicit)
        .or_else(|| given(from_env))
        .unwrap_or(configured)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.label_cutoff_bytes, 10e9);
        assert_eq!(config.size_display, SizeDisplay::Humanised);
        assert!(config.request_timeout().is_none());
    }

    #[test]
    fn test_config_deserialization_empty() {
        let config: Config = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_with_values() {
        let json = r#"{
            "base_url": "http://nas.local:8000",
            "label_cutoff_bytes": 5e9,
            "size_display": "gib",
            "request_timeout_secs": 30
        }"#;

        let config: Config = serde_json::from_str(json).expect("deserialize");

        assert_eq!(config.base_url, "http://nas.local:8000");
        assert_eq!(config.label_cutoff_bytes, 5e9);
        assert_eq!(config.size_display, SizeDisplay::Gibibytes);
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_skip_missing_timeout() {
        let json = serde_json::to_string(&Config::default()).expect("serialize");
        assert!(!json.contains("request_timeout_secs"));
        assert!(json.contains("humanised"));
    }

    #[test]
    fn test_config_load_and_save() {
        let temp_dir = TempDir::new().expect("temp dir");
        let config_path = temp_dir.path().join("vapour").join("config.json");

        let config = Config {
            base_url: "http://127.0.0.1:9000".to_string(),
            request_timeout_secs: Some(5),
            ..Config::default()
        };
        config.save_to_path(&config_path).expect("save");

        let loaded = Config::load_from_path(&config_path).expect("load");
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_invalid_json_names_file() {
        let temp_dir = TempDir::new().expect("temp dir");
        let config_path = temp_dir.path().join("config.json");
        fs::write(&config_path, "{ not json").expect("write");

        let err = Config::load_from_path(&config_path).expect_err("invalid");
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_base_url_precedence() {
        let configured = "http://configured";
        assert_eq!(
            pick_base_url(Some("http://flag"), Some("http://env"), configured),
            "http://flag"
        );
        assert_eq!(pick_base_url(None, Some("http://env"), configured), "http://env");
        assert_eq!(pick_base_url(None, None, configured), configured);
        assert_eq!(pick_base_url(Some("  "), None, configured), configured);
        assert_eq!(
            pick_base_url(Some(""), Some("http://env"), configured),
            "http://env"
        );
        assert_eq!(pick_base_url(None, Some(" "), configured), configured);
    }
}
