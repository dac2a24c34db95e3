//! Document store configuration.

use serde::{Deserialize, Serialize};

/// Where documents live and how long they are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StoreConfig {
    /// Path of the JSON store file. Empty means the platform data directory.
    #[serde(default)]
    pub path: String,

    /// Days until a saved document expires; saving or extending resets it.
    /// Default: 30
    #[serde(default = "default_expiry_days")]
    pub expiry_days: u32,

    /// Characters of raw content shown in document listings.
    /// Default: 150
    #[serde(default = "default_excerpt_chars")]
    pub excerpt_chars: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: String::new(),
            expiry_days: default_expiry_days(),
            excerpt_chars: default_excerpt_chars(),
        }
    }
}

impl StoreConfig {
    /// Merge another StoreConfig into this one.
    ///
    /// An empty `path` in `other` keeps the current path. Every other field
    /// is copied, so a key the override does not list reverts to its
    /// default.
    pub fn merge(&mut self, other: &StoreConfig) {
        if !other.path.is_empty() {
            self.path = other.path.clone();
        }
        self.expiry_days = other.expiry_days;
        self.excerpt_chars = other.excerpt_chars;
    }
}

fn default_expiry_days() -> u32 {
    30
}

fn default_excerpt_chars() -> usize {
    150
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let store = StoreConfig::default();
        assert!(store.path.is_empty());
        assert_eq!(store.expiry_days, 30);
        assert_eq!(store.excerpt_chars, 150);
    }

    #[test]
    fn test_merge_keeps_path_when_unset() {
        let mut base = StoreConfig {
            path: "/data/store.json".into(),
            ..StoreConfig::default()
        };
        let other: StoreConfig = toml::from_str("ExpiryDays = 7").unwrap();
        base.merge(&other);
        assert_eq!(base.path, "/data/store.json");
        assert_eq!(base.expiry_days, 7);
    }

    #[test]
    fn test_merge_unlisted_keys_revert_to_default() {
        let mut base = StoreConfig {
            expiry_days: 7,
            excerpt_chars: 40,
            ..StoreConfig::default()
        };
        let other: StoreConfig = toml::from_str("").unwrap();
        base.merge(&other);
        assert_eq!(base.expiry_days, 30);
        assert_eq!(base.excerpt_chars, 150);
    }
}
