//! Larder Configuration
//!
//! User configuration for the dataset location, output, and finder behavior.
//! Config file: ~/.config/larder/config.toml or /etc/larder/config.toml

use crate::dataset::DEFAULT_DATASET;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment override for the config file location
pub const CONFIG_ENV: &str = "LARDER_CONFIG";

/// Environment override for the dataset path
pub const DATASET_ENV: &str = "LARDER_DATASET";

/// Color display mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

/// Dataset configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Path to the JSON recipe collection
    #[serde(default = "default_dataset_path")]
    pub path: PathBuf,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
        }
    }
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATASET)
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// Finder behavior
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinderConfig {
    /// Pre-fill the ingredient prompt with staples chosen in Cupboard Staples.
    /// Off by default: staples only redirect to the finder.
    #[serde(default)]
    pub carry_staples: bool,
}

/// Main Larder configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LarderConfig {
    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub finder: FinderConfig,
}

impl LarderConfig {
    /// Get default user config path: ~/.config/larder/config.toml
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("larder").join("config.toml"))
    }

    /// Get system config path: /etc/larder/config.toml
    pub fn system_config_path() -> PathBuf {
        PathBuf::from("/etc/larder/config.toml")
    }

    /// Parse a config file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration
    ///
    /// Priority:
    /// 1. Explicit path (from --config), which must exist
    /// 2. $LARDER_CONFIG, which must exist
    /// 3. User config (~/.config/larder/config.toml)
    /// 4. System config (/etc/larder/config.toml)
    /// 5. Defaults
    ///
    /// $LARDER_DATASET then overrides the dataset path.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Self::load_file(explicit)?;
        if let Ok(dataset) = std::env::var(DATASET_ENV) {
            if !dataset.is_empty() {
                config.dataset.path = PathBuf::from(dataset);
            }
        }
        Ok(config)
    }

    fn load_file(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Self::load_from(Path::new(&path));
        }

        let candidates = Self::user_config_path()
            .into_iter()
            .chain(std::iter::once(Self::system_config_path()));
        for path in candidates {
            if path.exists() {
                debug!(path = %path.display(), "Using config file");
                return Self::load_from(&path);
            }
        }

        Ok(Self::default())
    }
}
