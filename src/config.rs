//! Server configuration.
//!
//! Settings come from built-in defaults, then an optional YAML file, then
//! command-line overrides. The file is `task-manager.yaml` in the working
//! directory unless another path is given explicitly.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file path relative to the working directory.
pub const CONFIG_FILE_PATH: &str = "task-manager.yaml";

/// Default bind host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 5000;

/// Runtime configuration for the web server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,

    /// Port to bind. `0` picks an ephemeral port.
    pub port: u16,

    /// Verbose logging and per-request template reloading.
    pub debug: bool,

    /// Directory with `*.html` templates overriding the embedded page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST.to_string(), port: DEFAULT_PORT, debug: false, templates_dir: None }
    }
}

impl ServerConfig {
    /// Load config from the default location, returning None if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load() -> Result<Option<Self>> {
        Self::load_from(Path::new("."))
    }

    /// Load config from a specific base directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load_from(base_dir: &Path) -> Result<Option<Self>> {
        let config_path = base_dir.join(CONFIG_FILE_PATH);
        if !config_path.exists() {
            return Ok(None);
        }
        Self::load_file(&config_path).map(Some)
    }

    /// Load config from an explicit file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or cannot be parsed.
    pub fn load_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        // An empty file parses as YAML null; treat it as "all defaults".
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Resolve the effective config: `explicit` if given, else the default
    /// location, else built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen file is missing (explicit only) or
    /// cannot be parsed.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_file(path),
            None => Ok(Self::load()?.unwrap_or_default()),
        }
    }

    /// The `(host, port)` pair to bind.
    ///
    /// Resolves through `ToSocketAddrs`, so IPv6 literals (`::1`, or the
    /// bracketed `[::1]` form) and host names both work.
    #[must_use]
    pub fn bind_address(&self) -> (&str, u16) {
        let host = self.host.trim_start_matches('[').trim_end_matches(']');
        (host, self.port)
    }
}
