//! Command-line interface for the task manager server.
//!
//! The binary is a thin wrapper: it parses [`Cli`] and hands it to [`run`].

use crate::config::ServerConfig;
use crate::error::Result;
use crate::logging;
use crate::templates::Templates;
use crate::web::{self, AppState};
use clap::Parser;
use std::path::PathBuf;

/// Task Manager - a small in-memory to-do list served over HTTP.
///
/// Settings are read from `task-manager.yaml` in the working directory (or
/// the file given with `--config`); flags override the file.
#[derive(Parser, Debug, Default)]
#[command(name = "task-manager")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Interface to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Verbose logging and template reloading on every request
    #[arg(long)]
    pub debug: bool,

    /// Path to a YAML config file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Directory with page templates overriding the built-in page
    #[arg(long)]
    pub templates_dir: Option<PathBuf>,
}

impl Cli {
    /// Apply command-line overrides on top of a loaded config.
    #[must_use]
    pub fn apply(&self, mut config: ServerConfig) -> ServerConfig {
        if let Some(host) = &self.host {
            config.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if self.debug {
            config.debug = true;
        }
        if let Some(dir) = &self.templates_dir {
            config.templates_dir = Some(dir.clone());
        }
        config
    }

    /// Resolve the effective server config for this invocation.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file is missing (when given explicitly)
    /// or cannot be parsed.
    pub fn server_config(&self) -> Result<ServerConfig> {
        let config = ServerConfig::resolve(self.config.as_deref())?;
        Ok(self.apply(config))
    }
}

/// Run the server described by `cli` until it is shut down.
///
/// # Errors
///
/// Returns an error if configuration, templates, or binding fail.
pub async fn run(cli: Cli) -> Result<()> {
    let config = cli.server_config()?;

    if let Err(e) = logging::init(config.debug) {
        eprintln!("Warning: logging init failed: {e}");
    }
    logging::install_panic_hook();

    let templates =
        Templates::load(config.templates_dir.as_deref())?.with_auto_reload(config.debug);
    tracing::debug!(dir = %templates.dir().display(), debug = config.debug, "templates ready");

    let state = AppState::in_memory(templates);
    web::start_server(&config, state).await
}
