//! Configuration management (TOML)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// History window length, in samples.
    pub sample_range: usize,
    /// Minimum occurrences within the window to classify as permanent.
    pub hitrate: usize,
    /// Where the rolling history is persisted between runs.
    pub statefile: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sample_range: 10,
            hitrate: 9,
            statefile: Self::default_statefile(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "chatterstats")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    pub fn default_statefile() -> PathBuf {
        directories::ProjectDirs::from("", "", "chatterstats")
            .map(|dirs| dirs.data_local_dir().join("chatterstats.json"))
            .unwrap_or_else(|| PathBuf::from("chatterstats.json"))
    }
}
