//! # `task_manager`
//!
//! A minimal in-memory to-do list served over HTTP: one page listing the
//! tasks, one endpoint to add a task and one to clear them all.

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod tasks;
pub mod templates;
pub mod web;

pub use error::{Error, Result};
pub use tasks::{InMemoryTaskStore, Task, TaskStore};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
