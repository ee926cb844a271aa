//! Configuration file support
//!
//! Settings are stored as TOML:
//!
//! ```toml
//! [export]
//! include_inactive = false
//! scale_vertices = false
//! group_prefix = "submesh"
//! ```
//!
//! Missing keys fall back to their defaults.

use crate::converter::ObjExportOptions;
use crate::error::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Top-level settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub export: ObjExportOptions,
}

impl Settings {
    /// Parse settings from TOML text.
    ///
    /// # Errors
    /// Returns [`Error::ConfigParse`](crate::Error::ConfigParse) on invalid TOML.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load settings from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!("Loaded config from {}", path.as_ref().display());
        Self::from_toml_str(&text)
    }

    /// Load from `path` if given, else from [`Settings::default_path`] if it
    /// exists, else defaults.
    ///
    /// # Errors
    /// Returns an error if an existing file cannot be read or parsed.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    /// `<platform config dir>/pckmesh/config.toml`
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pckmesh").join(CONFIG_FILE_NAME))
    }
}
