use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level viewer configuration, read from a TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewerConfig {
    #[serde(default)]
    pub data: DataConfig,
}

/// Where block definition sources live. The base set loads first, then
/// each mod pack in the listed order; later packs may carry overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    pub base: PathBuf,
    #[serde(default)]
    pub mods: Vec<PathBuf>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            base: PathBuf::from("data/blocks.json"),
            mods: Vec::new(),
        }
    }
}

impl ViewerConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// All block sources in load order: base first, then mods.
    pub fn sources(&self) -> Vec<PathBuf> {
        let mut paths = vec![self.data.base.clone()];
        paths.extend(self.data.mods.iter().cloned());
        paths
    }
}
