//! File-backed task store.
//!
//! The collection lives in a single JSON array. Writes go to a sibling
//! temporary file that is then renamed over the original, so readers never
//! see a half-written document.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use futures::future::BoxFuture;
use static_assertions::assert_impl_all;

use super::repository::{StoreError, TaskStore};
use crate::domain::Task;

const TEMP_SUFFIX: &str = ".tmp";

/// Stores the task collection as a pretty-printed JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileTaskStore {
    path: PathBuf,
}

assert_impl_all!(JsonFileTaskStore: TaskStore, Send, Sync);

impl JsonFileTaskStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the location of the backing document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut temp: OsString = self.path.clone().into_os_string();
        temp.push(TEMP_SUFFIX);
        PathBuf::from(temp)
    }

    async fn load(&self) -> Result<Vec<Task>, StoreError> {
        let bytes = tokio::fs::read(&self.path).await?;
        serde_json::from_slice(&bytes).map_err(|error| StoreError::Corrupt(error.to_string()))
    }

    async fn replace(&self, tasks: Vec<Task>) -> Result<(), StoreError> {
        let encoded = serde_json::to_vec_pretty(&tasks)
            .map_err(|error| StoreError::Corrupt(error.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let temp = self.temp_path();
        tokio::fs::write(&temp, encoded).await?;
        tokio::fs::rename(&temp, &self.path).await?;

        tracing::debug!(path = %self.path.display(), count = tasks.len(), "Task document written");
        Ok(())
    }
}

impl TaskStore for JsonFileTaskStore {
    fn read_all(&self) -> BoxFuture<'_, Result<Vec<Task>, StoreError>> {
        Box::pin(self.load())
    }

    fn write_all(&self, tasks: Vec<Task>) -> BoxFuture<'_, Result<(), StoreError>> {
        Box::pin(self.replace(tasks))
    }
}

// =============================================================================
// Tests
// =============================================================================
