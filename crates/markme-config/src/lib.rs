//! MarkMe Config
//!
//! This crate handles configuration loading and management
//! for markme, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/markme/config.toml`
//! - macOS: `~/Library/Application Support/markme/config.toml`
//! - Windows: `%APPDATA%\markme\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use markme_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an override file
//! let config = Config::load_with_override(Some("./custom.toml")).unwrap();
//! ```

mod features;
mod store;

pub use features::FeaturesConfig;
pub use store::StoreConfig;

use markme_core::{MarkmeError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[features]
Links         = true
Images        = true
MaxInputBytes = 0

[store]
Path         = ""
ExpiryDays   = 30
ExcerptChars = 150
"#;

/// File name of the JSON store inside the data directory.
const STORE_FILE: &str = "store.json";

/// Main configuration structure.
///
/// Contains all configuration sections for markme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Feature flags configuration
    #[serde(default)]
    pub features: FeaturesConfig,

    /// Store configuration
    #[serde(default)]
    pub store: StoreConfig,
}

impl Default for Config {
    fn default() -> Self {
        // Parse the default TOML to ensure consistency
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use markme_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[features]"));
    /// assert!(toml.contains("[store]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "markme")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns the platform-specific data directory (default store location).
    pub fn data_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "markme")
            .map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Path of the JSON store file.
    ///
    /// Uses `[store] Path` when set, else `store.json` in [`Config::data_dir`].
    ///
    /// # Example
    ///
    /// ```
    /// use markme_config::Config;
    /// let mut config = Config::default();
    /// config.store.path = "/tmp/notes.json".into();
    /// assert_eq!(config.store_path().unwrap(), std::path::PathBuf::from("/tmp/notes.json"));
    /// ```
    pub fn store_path(&self) -> Result<PathBuf> {
        if !self.store.path.is_empty() {
            return Ok(PathBuf::from(&self.store.path));
        }
        Self::data_dir()
            .map(|dir| dir.join(STORE_FILE))
            .ok_or_else(|| MarkmeError::Config("Could not determine data directory".into()))
    }

    /// Ensures the config file exists, creating it with defaults if not.
    ///
    /// # Returns
    ///
    /// The path to the config file.
    pub fn ensure_config_file() -> Result<PathBuf> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| MarkmeError::Config("Could not determine config directory".into()))?;

        std::fs::create_dir_all(&config_dir)?;

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            std::fs::write(&config_path, DEFAULT_TOML)?;
        }

        Ok(config_path)
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| MarkmeError::Config(format!("Parse error in {}: {}", path.display(), e)))
    }

    /// Load configuration with an optional override file or string.
    ///
    /// 1. Load the base config from the default location
    /// 2. If an override is provided:
    ///    - If it's a path to an existing file, load and merge it
    ///    - Otherwise, treat it as a TOML string and parse it
    ///
    /// # Example
    ///
    /// ```no_run
    /// use markme_config::Config;
    ///
    /// let config = Config::load_with_override(Some("[features]\nLinks = false")).unwrap();
    /// assert!(!config.features.links);
    /// ```
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;
        if let Some(override_str) = override_config {
            config.merge(&Self::parse_override(override_str)?);
        }
        Ok(config)
    }

    /// Parse an override given as a file path or inline TOML.
    pub fn parse_override(override_str: &str) -> Result<Self> {
        let override_path = Path::new(override_str);
        let override_toml = if override_path.is_file() {
            std::fs::read_to_string(override_path)?
        } else {
            override_str.to_string()
        };

        toml::from_str(&override_toml)
            .map_err(|e| MarkmeError::Config(format!("Override parse error: {}", e)))
    }

    /// Merge another config into this one.
    ///
    /// Values from `other` take precedence over values in `self`. Sections
    /// and keys missing from an override parse as their defaults, so they
    /// reset the base value too. An empty store `Path` keeps the base path.
    ///
    /// # Example
    ///
    /// ```
    /// use markme_config::Config;
    ///
    /// let mut base = Config::default();
    /// let override_config: Config = toml::from_str(r#"
    ///     [features]
    ///     Images = false
    /// "#).unwrap();
    ///
    /// base.merge(&override_config);
    /// assert!(!base.features.images);
    /// ```
    pub fn merge(&mut self, other: &Config) {
        self.features.merge(&other.features);
        self.store.merge(&other.store);
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| MarkmeError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.features.links);
        assert!(config.features.images);
        assert_eq!(config.store.expiry_days, 30);
        assert_eq!(config.store.excerpt_chars, 150);
    }

    #[test]
    fn test_default_toml_parses() {
        let config: Config = toml::from_str(DEFAULT_TOML).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_merge() {
        let mut base = Config::default();

        let override_toml = r#"
            [features]
            Links = false
            [store]
            ExpiryDays = 7
        "#;
        let override_config: Config = toml::from_str(override_toml).unwrap();

        base.merge(&override_config);
        assert!(!base.features.links);
        assert_eq!(base.store.expiry_days, 7);
    }

    #[test]
    fn test_merge_unlisted_keys_revert_to_default() {
        let mut base = Config::default();
        base.store.expiry_days = 7;

        base.merge(&Config::parse_override("[features]\nLinks = false").unwrap());
        assert!(!base.features.links);
        assert_eq!(base.store.expiry_days, 30);
    }

    #[test]
    fn test_parse_override_inline() {
        let config = Config::parse_override("[features]\nMaxInputBytes = 10").unwrap();
        assert_eq!(config.features.max_input_bytes, 10);
    }

    #[test]
    fn test_parse_override_rejects_garbage() {
        let err = Config::parse_override("[features\nLinks = ").unwrap_err();
        assert!(matches!(err, MarkmeError::Config(_)));
    }

    #[test]
    fn test_parse_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("override.toml");
        std::fs::write(&path, "[store]\nPath = \"/x/store.json\"").unwrap();

        let config = Config::parse_override(path.to_str().unwrap()).unwrap();
        assert_eq!(config.store.path, "/x/store.json");
    }

    #[test]
    fn test_store_path_explicit() {
        let mut config = Config::default();
        config.store.path = "/tmp/markme.json".into();
        assert_eq!(config.store_path().unwrap(), PathBuf::from("/tmp/markme.json"));
    }

    #[test]
    fn test_config_path() {
        // On CI/containers this might be None, so we just check it doesn't panic
        if let Some(p) = Config::config_path() {
            assert!(p.to_string_lossy().contains("markme"));
        }
    }

    #[test]
    fn test_roundtrip_serialization() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.features.images = false;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }
}
