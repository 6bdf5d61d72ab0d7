//! Error types for `task_manager`.

use std::path::PathBuf;

/// Errors that can occur in the task manager.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An add request carried no description, or an empty one.
    #[error("No task provided")]
    EmptyTask,

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error occurred.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// An explicitly requested config file does not exist.
    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    /// A template error occurred.
    #[error("Template error: {0}")]
    Template(String),
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
