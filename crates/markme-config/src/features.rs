//! Feature flags configuration.
//!
//! This module contains the `FeaturesConfig` struct which controls
//! which optional transformer passes run and how much input is accepted.

use serde::{Deserialize, Serialize};

/// Feature flags configuration.
///
/// None of these flags can widen what the sanitizer lets through; they
/// only switch off passes or cap the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeaturesConfig {
    /// Convert `[label](url)` into links.
    /// Default: true
    #[serde(default = "default_true")]
    pub links: bool,

    /// Convert `![alt](url)` into images.
    /// Default: true
    #[serde(default = "default_true")]
    pub images: bool,

    /// Truncate input above this many bytes before rendering (0 = no cap).
    /// Default: 0
    #[serde(default)]
    pub max_input_bytes: usize,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            links: true,
            images: true,
            max_input_bytes: 0,
        }
    }
}

impl FeaturesConfig {
    /// Merge another FeaturesConfig into this one.
    ///
    /// All fields are copied from `other`. A key the override does not list
    /// was parsed as its default, so it reverts to the default here rather
    /// than keeping the value in `self`.
    pub fn merge(&mut self, other: &FeaturesConfig) {
        self.links = other.links;
        self.images = other.images;
        self.max_input_bytes = other.max_input_bytes;
    }

    /// Create a new FeaturesConfig with all features enabled.
    pub fn all_enabled() -> Self {
        Self::default()
    }

    /// Create a new FeaturesConfig with links and images disabled.
    pub fn all_disabled() -> Self {
        Self {
            links: false,
            images: false,
            max_input_bytes: 0,
        }
    }
}

fn default_true() -> bool {
    true
}
