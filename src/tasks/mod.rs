//! Task list state.
//!
//! The store keeps an ordered list of tasks in memory for the lifetime of the
//! process. It is created once at start-up and handed to every request
//! handler; there is no global instance.
//!
//! # Example
//!
//! ```
//! use task_manager::tasks::{InMemoryTaskStore, TaskStore};
//!
//! let store = InMemoryTaskStore::new();
//! let task = store.add(Some("Write tests")).unwrap();
//! assert_eq!(task.id, 1);
//!
//! assert!(store.add(Some("")).is_err());
//! assert_eq!(store.len(), 1);
//!
//! store.clear();
//! assert!(store.is_empty());
//! ```

pub mod models;
pub mod store;

pub use models::Task;
pub use store::{InMemoryTaskStore, TaskStore};
