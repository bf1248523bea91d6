//! Gauge settings loader.

use std::path::Path;

use gauge_core::GaugeConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for gauge settings from TOML files.
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings from a TOML file.
    ///
    /// Missing keys fall back to [`GaugeConfig::default`].
    pub fn load(path: &Path) -> LoadResult<GaugeConfig> {
        let content = read_file(path)?;
        let config: GaugeConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse settings TOML: {}", e))?;

        Ok(config)
    }
}
