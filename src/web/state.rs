//! Shared state handed to every request handler.

use crate::tasks::{InMemoryTaskStore, TaskStore};
use crate::templates::Templates;
use std::sync::Arc;

/// Handles to the task store and page templates.
///
/// Cloning is cheap; every clone refers to the same store.
#[derive(Clone)]
pub struct AppState {
    /// The task list.
    pub store: Arc<dyn TaskStore>,
    /// Page templates.
    pub templates: Arc<Templates>,
}

impl AppState {
    /// Build state around an existing store.
    pub fn new(store: Arc<dyn TaskStore>, templates: Templates) -> Self {
        Self { store, templates: Arc::new(templates) }
    }

    /// State with a fresh, empty in-memory store.
    pub fn in_memory(templates: Templates) -> Self {
        Self::new(Arc::new(InMemoryTaskStore::new()), templates)
    }
}
