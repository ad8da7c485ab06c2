//! # Configuration
//!
//! [`SystemConfig`] is read from a TOML file. Every key is optional:
//!
//! ```toml
//! policy = "strict"      # or "lenient" (default)
//! log_filter = "debug"   # used when RUST_LOG is unset
//!
//! [[menu]]
//! id = 1
//! name = "Margherita Pizza"
//! price = 48.0
//! prep_time_minutes = 15
//!
//! [[tables]]
//! number = 5
//! capacity = 8
//! ```
//!
//! An empty `menu` or `tables` list means the built-in demo data is used for
//! that part. The demo binary looks for the file named by `RESTAURANT_CONFIG`.

use crate::model::{Dish, TableNumber, TransitionPolicy};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable holding the path of the config file.
pub const CONFIG_ENV_VAR: &str = "RESTAURANT_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

/// One table of the floor plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TableLayout {
    pub number: TableNumber,
    pub capacity: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    pub policy: TransitionPolicy,
    pub log_filter: String,
    pub menu: Vec<Dish>,
    pub tables: Vec<TableLayout>,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            policy: TransitionPolicy::Lenient,
            log_filter: "info".to_string(),
            menu: Vec::new(),
            tables: Vec::new(),
        }
    }
}

impl SystemConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Reads and parses the config file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref().to_path_buf();
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "Failed to read config");
                return Err(ConfigError::Read { path, source: err });
            }
        };

        match Self::from_toml_str(&content) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), ?config, "Config loaded");
                Ok(config)
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "Failed to parse config");
                Err(ConfigError::Parse { path, source: err })
            }
        }
    }

    /// Loads the file named by [`CONFIG_ENV_VAR`], or the defaults if it is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(PathBuf::from(path)),
            None => Ok(Self::default()),
        }
    }
}
