//! Render feature flags.

use markme_config::FeaturesConfig;
use markme_transform::{Pass, Transformer};

/// Switches that shape the transformer pipeline.
///
/// Sanitization is not a feature: it always runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFeatures {
    /// Run the link pass
    pub links: bool,
    /// Run the image pass
    pub images: bool,
    /// Input cap in bytes (0 = unlimited)
    pub max_input_bytes: usize,
}

impl Default for RenderFeatures {
    fn default() -> Self {
        Self {
            links: true,
            images: true,
            max_input_bytes: 0,
        }
    }
}

impl RenderFeatures {
    /// Build features from the `[features]` config section.
    pub fn from_config(config: &FeaturesConfig) -> Self {
        Self {
            links: config.links,
            images: config.images,
            max_input_bytes: config.max_input_bytes,
        }
    }

    /// The transformer these features select.
    pub fn transformer(&self) -> Transformer {
        let mut transformer = Transformer::new();
        if !self.links {
            transformer = transformer.without(Pass::Link);
        }
        if !self.images {
            transformer = transformer.without(Pass::Image);
        }
        transformer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_runs_every_pass() {
        let features = RenderFeatures::default();
        assert_eq!(features.transformer().passes(), &Pass::ALL);
    }

    #[test]
    fn test_from_config() {
        let config = FeaturesConfig {
            links: false,
            images: true,
            max_input_bytes: 64,
        };
        let features = RenderFeatures::from_config(&config);
        assert!(!features.links);
        assert_eq!(features.max_input_bytes, 64);
        assert!(!features.transformer().passes().contains(&Pass::Link));
        assert!(features.transformer().passes().contains(&Pass::Image));
    }
}
