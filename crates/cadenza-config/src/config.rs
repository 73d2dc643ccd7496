// Root client configuration with JSON persistence.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::skin_config::SkinConfig;

/// Root client configuration. Unknown or missing sections deserialize
/// to their defaults so older config files keep loading.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub skin: SkinConfig,
}

impl Config {
    /// Loads and validates configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        let mut config: Config = serde_json::from_str(&text)
            .with_context(|| format!("parsing config from {}", path.display()))?;
        config.validate();
        Ok(config)
    }

    /// Saves configuration as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let text = serde_json::to_string_pretty(self).context("serializing config")?;
        fs::write(path, text).with_context(|| format!("writing config to {}", path.display()))?;
        Ok(())
    }

    /// Drops invalid entries from every section.
    pub fn validate(&mut self) {
        self.skin.validate();
    }
}
