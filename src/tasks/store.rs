//! Task store trait and in-memory implementation.

use crate::error::{Error, Result};
use crate::tasks::models::Task;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Trait for task storage operations.
///
/// Implementations are shared between request handlers, so every operation
/// must be safe to call concurrently.
pub trait TaskStore: Send + Sync {
    /// Append a task with the given description.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTask`] if `description` is `None` or empty. The
    /// store is left unchanged in that case.
    fn add(&self, description: Option<&str>) -> Result<Task>;

    /// Remove every task.
    fn clear(&self);

    /// Snapshot of all tasks in insertion order.
    fn list(&self) -> Vec<Task>;

    /// Number of tasks currently stored.
    fn len(&self) -> usize {
        self.list().len()
    }

    /// Whether the store holds no tasks.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug)]
struct Inner {
    tasks: Vec<Task>,
    next_id: u64,
}

/// Process-local task store.
///
/// The task list and the id counter share one lock, so ids are assigned and
/// appended atomically. The counter is not reset by [`TaskStore::clear`].
#[derive(Debug)]
pub struct InMemoryTaskStore {
    inner: Mutex<Inner>,
}

impl InMemoryTaskStore {
    /// Create an empty store. The first task gets id 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { inner: Mutex::new(Inner { tasks: Vec::new(), next_id: 1 }) }
    }

    // Every critical section leaves `Inner` consistent, so a poisoned lock is
    // still safe to use.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore for InMemoryTaskStore {
    fn add(&self, description: Option<&str>) -> Result<Task> {
        let description = match description {
            Some(d) if !d.is_empty() => d,
            _ => return Err(Error::EmptyTask),
        };

        let mut inner = self.lock();
        let task = Task::new(inner.next_id, description);
        inner.next_id += 1;
        inner.tasks.push(task.clone());
        drop(inner);

        tracing::debug!(id = task.id, "task appended");
        Ok(task)
    }

    fn clear(&self) {
        let removed = {
            let mut inner = self.lock();
            let removed = inner.tasks.len();
            inner.tasks.clear();
            removed
        };
        tracing::debug!(removed, "task list cleared");
    }

    fn list(&self) -> Vec<Task> {
        self.lock().tasks.clone()
    }

    fn len(&self) -> usize {
        self.lock().tasks.len()
    }
}
