//! User settings for hsift.
//!
//! Config file resolution order:
//! 1. Explicit path passed to Config::load_from()
//! 2. HSIFT_CONFIG environment variable
//! 3. Default: <config dir>/hsift/config.toml
//!
//! A missing file is not an error; defaults are used instead.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// hsift configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Indentation used for JSON output.
    #[serde(default = "default_indent")]
    pub indent: String,

    /// Print an empty array instead of failing when nothing matches.
    #[serde(default)]
    pub allow_empty: bool,
}

fn default_indent() -> String {
    "\t".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            allow_empty: false,
        }
    }
}

impl Config {
    /// Load config from the resolved location, or use defaults.
    pub fn load() -> Result<Self> {
        match resolve_config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from a specific file, or use defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config = toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        Ok(())
    }
}

/// Resolve the config file path using the standard resolution order.
pub fn resolve_config_path() -> Option<PathBuf> {
    // 1. Environment variable
    if let Ok(path) = std::env::var("HSIFT_CONFIG") {
        return Some(PathBuf::from(path));
    }

    // 2. XDG config directory (via directories crate)
    ProjectDirs::from("", "", "hsift").map(|dirs| dirs.config_dir().join("config.toml"))
}
