//! User configuration, loaded from TOML.
//!
//! Lives at `~/.config/greeter-nav/config.toml` (or the platform
//! equivalent via `dirs::config_dir()`). A missing default file means
//! defaults; an explicitly given path must exist.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::nav::PopPolicy;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Popping to a route that is not on the back stack is an error
    /// instead of a no-op.
    pub strict_pop: bool,

    /// Show the current route path in the title bar.
    pub show_route_path: bool,

    /// Write tracing output here. Logging is off when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            strict_pop: false,
            show_route_path: true,
            log_file: None,
        }
    }
}

impl Config {
    /// Default config file location, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("greeter-nav").join("config.toml"))
    }

    /// Load from `explicit` if given, otherwise from the default location.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Config::default()),
            },
        }
    }

    /// Read and parse a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn pop_policy(&self) -> PopPolicy {
        if self.strict_pop {
            PopPolicy::Strict
        } else {
            PopPolicy::Lenient
        }
    }
}
