//! Turn rule configuration loader.

use std::path::Path;

use unit_core::TurnConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for turn rules from TOML files.
///
/// Missing keys keep their defaults, so an empty file yields
/// [`TurnConfig::default`].
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<TurnConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<TurnConfig> {
        let config: TurnConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if !(0.0..1.0).contains(&config.movement_epsilon) {
            anyhow::bail!(
                "movement_epsilon must be in [0, 1), got {}",
                config.movement_epsilon
            );
        }

        Ok(config)
    }
}
