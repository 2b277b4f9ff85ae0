//! Service configuration loading.

use anyhow::{Context, Result};
use ndvi_generator::{GeneratorConfig, ImageryConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings read from the optional YAML config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Sampler and historical series parameters.
    pub generator: GeneratorConfig,

    /// Placeholder image URL bases.
    pub imagery: ImageryConfig,
}

impl ServiceConfig {
    /// Load configuration from a YAML file.
    ///
    /// A missing file yields the defaults; a file that exists but does not
    /// parse or validate is an error.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::warn!(
                "Config file {} does not exist, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read: {:?}", path))?;

        let config: ServiceConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse: {:?}", path))?;

        config
            .generator
            .validate()
            .with_context(|| format!("Invalid settings in {:?}", path))?;

        tracing::info!(
            sample_count = config.generator.sample_count,
            zone_count = config.generator.zone_count,
            "Loaded service config from {:?}",
            path
        );

        Ok(config)
    }
}
