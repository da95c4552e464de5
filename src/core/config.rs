//! core::config
//!
//! Connection configuration, loaded once at startup from a JSON file.
//!
//! # Recognized keys
//!
//! - `base_url` - GeoServer REST base URL (e.g. `http://host/geoserver/rest/`)
//! - `username` / `password` - basic-auth credentials
//! - `workspace_name` - target workspace for stores, layers, and styles
//!
//! Unknown keys are ignored. A missing file or malformed JSON is a fatal
//! startup error; no network activity happens before the config loads.
//!
//! # Example
//!
//! ```no_run
//! use geopub::core::config::Config;
//! use std::path::Path;
//!
//! let config = Config::load(Path::new("geoserver.json")).unwrap();
//! println!("publishing into workspace {}", config.workspace_name);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// GeoServer connection configuration.
///
/// Immutable for the lifetime of the process once loaded.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// REST base URL, normalized to end with `/`.
    pub base_url: String,
    /// Basic-auth username.
    pub username: String,
    /// Basic-auth password.
    pub password: String,
    /// Workspace that receives stores, layers, and style references.
    pub workspace_name: String,
}

impl Config {
    /// Load configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `ReadError` if the file cannot be read, `ParseError` if it is
    /// not valid JSON or misses a required key, `InvalidValue` if a value is
    /// empty.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config: Config =
            serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        config.validate()?;

        // Every endpoint is joined onto the base URL with string formatting,
        // so a trailing slash is required.
        if !config.base_url.ends_with('/') {
            config.base_url.push('/');
        }

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.is_empty() {
            return Err(ConfigError::InvalidValue("base_url must not be empty".into()));
        }
        if self.workspace_name.is_empty() {
            return Err(ConfigError::InvalidValue(
                "workspace_name must not be empty".into(),
            ));
        }
        Ok(())
    }
}
