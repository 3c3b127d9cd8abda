//! Configuration system using TOML files.
//!
//! Settings are loaded from `tunedeck.toml` in the working directory if it
//! exists; a path passed via `--config` must exist. All fields have
//! defaults, so an empty or absent file is valid. CLI flags override
//! file values.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "tunedeck.toml";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Library scanning settings
    pub library: LibraryConfig,

    /// Output settings
    pub output: OutputConfig,
}

/// Library scanning settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// File extensions treated as audio (case-insensitive, without dot)
    pub extensions: Vec<String>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["mp3".into(), "flac".into(), "wav".into(), "m4a".into()],
        }
    }
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Root directory the dashboard is written into
    pub root: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("output_dashboard"),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// With an explicit path the file must exist and parse. Without one,
    /// `tunedeck.toml` is read if present, otherwise defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => {
                let contents = fs::read_to_string(p)
                    .map_err(|e| Error::config(format!("cannot read {}: {}", p.display(), e)))?;
                Self::parse(&contents)
            }
            None => match fs::read_to_string(DEFAULT_CONFIG_FILE) {
                Ok(contents) => Self::parse(&contents),
                Err(_) => Ok(Self::default()),
            },
        }
    }

    fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| Error::config(e.to_string()))
    }
}
