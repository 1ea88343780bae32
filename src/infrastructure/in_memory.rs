//! In-memory task store.
//!
//! Keeps the collection behind `Arc<RwLock<...>>`; clones share the same
//! data. Used by tests and for running the server without touching disk.

use std::sync::Arc;

use futures::future::{self, BoxFuture};
use parking_lot::RwLock;
use static_assertions::assert_impl_all;

use super::repository::{StoreError, TaskStore};
use crate::domain::Task;

/// A task store that never touches the filesystem.
///
/// Starts out "missing" (as if the document had never been written) unless
/// built with [`InMemoryTaskStore::with_tasks`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    tasks: Arc<RwLock<Option<Vec<Task>>>>,
}

assert_impl_all!(InMemoryTaskStore: TaskStore, Send, Sync);

impl InMemoryTaskStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `tasks`.
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Arc::new(RwLock::new(Some(tasks))),
        }
    }

    /// Returns a copy of the stored collection, or `None` if nothing was
    /// ever written.
    #[must_use]
    pub fn snapshot(&self) -> Option<Vec<Task>> {
        self.tasks.read().clone()
    }
}

impl TaskStore for InMemoryTaskStore {
    fn read_all(&self) -> BoxFuture<'_, Result<Vec<Task>, StoreError>> {
        let result = self.snapshot().ok_or(StoreError::Missing);
        Box::pin(future::ready(result))
    }

    fn write_all(&self, tasks: Vec<Task>) -> BoxFuture<'_, Result<(), StoreError>> {
        *self.tasks.write() = Some(tasks);
        Box::pin(future::ready(Ok(())))
    }
}
