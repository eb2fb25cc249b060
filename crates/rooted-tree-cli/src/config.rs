//! TOML configuration for `rtree`.
//!
//! The file is looked up at, in order: the `--config` flag, the
//! `RTREE_CONFIG` environment variable, and
//! `<config dir>/rooted-tree/config.toml`. A missing file means defaults.
//!
//! ```toml
//! [report]
//! max_children = 20
//! child_wrap = "bottom"
//! depth = 2
//!
//! [logging]
//! level = "warn"
//!
//! [input]
//! format = "paths"
//! ```

use crate::error::{Error, Result};
use crate::input::InputFormat;
use rooted_tree::ChildWrap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "RTREE_CONFIG";

const PROJECT_DIR: &str = "rooted-tree";
const CONFIG_FILE: &str = "config.toml";

/// Complete `rtree` configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Report defaults
    pub report: ReportSettings,
    /// Logging defaults
    pub logging: LoggingSettings,
    /// Input defaults
    pub input: InputSettings,
}

/// `[report]` section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Children shown per node before wrapping
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_children: Option<u32>,
    /// Which end of a long child list stays visible
    pub child_wrap: ChildWrap,
    /// Levels shown around a selected node, or below the root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<u32>,
}

/// `[logging]` section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when neither `RUST_LOG` nor `-v` is given
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// `[input]` section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// Format assumed when `--format` is not given
    pub format: InputFormat,
}

impl CliConfig {
    /// Default location: `<config dir>/rooted-tree/config.toml`.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_DIR).join(CONFIG_FILE))
    }

    /// Resolves the config file path from the flag, environment and default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        resolve_with(explicit, std::env::var(CONFIG_ENV_VAR).ok())
    }

    /// Loads the resolved config file, or defaults when it does not exist.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        match Self::resolve_config_path(explicit) {
            Some(path) if path.exists() => Self::from_file(&path),
            Some(path) => {
                log::debug!("No config file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Reads and parses a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config = Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parses config TOML.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serializes the config as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Log filter directive for `verbose` repetitions of `-v`.
    pub fn log_filter(&self, verbose: u8) -> String {
        match verbose {
            0 => self.logging.level.clone(),
            1 => "debug".to_string(),
            _ => "trace".to_string(),
        }
    }
}

fn resolve_with(explicit: Option<&str>, env_value: Option<String>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(PathBuf::from(path));
    }
    match env_value {
        Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => CliConfig::default_config_path(),
    }
}
