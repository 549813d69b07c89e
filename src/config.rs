//! Box office configuration.
//!
//! Loaded from the path given with `--config`, or from
//! `~/.box-office/config.toml` when that file exists. Every key is optional.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Box office configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Label appended to money amounts in confirmations.
    pub currency: String,

    /// `tracing` filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "TL".to_string(),
            log_filter: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load config from `explicit`, or from the default path if it exists.
    ///
    /// An explicit path must exist. A missing default file yields the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, String> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::path() {
                Some(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };

        let contents = fs::read_to_string(&path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;

        Self::parse(&contents).map_err(|e| format!("invalid config at {}: {e}", path.display()))
    }

    /// The default config file path: `~/.box-office/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".box-office").join("config.toml"))
    }

    fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}
