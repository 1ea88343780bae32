//! Store trait for the task collection.
//!
//! Implementations load and replace the entire collection in one operation.
//! There is no partial update, so callers perform read-modify-write
//! themselves.

use futures::future::BoxFuture;
use thiserror::Error;

use crate::domain::{Task, TaskId};

// =============================================================================
// Store Error
// =============================================================================

/// Errors that can occur while reading or writing the collection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing document does not exist yet.
    #[error("Task document not found")]
    Missing,

    /// The backing document exists but is not a valid task collection.
    #[error("Task document is corrupt: {0}")]
    Corrupt(String),

    /// Any other I/O failure.
    #[error("Storage error: {0}")]
    Io(String),

    /// The collection already holds the largest representable id.
    #[error("No task id left after {0}")]
    IdsExhausted(TaskId),
}

impl From<std::io::Error> for StoreError {
    fn from(error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            Self::Missing
        } else {
            Self::Io(error.to_string())
        }
    }
}

// =============================================================================
// Task Store
// =============================================================================

/// Whole-collection persistence for tasks.
///
/// Object-safe so that `AppState` can hold any backend behind
/// `Arc<dyn TaskStore>`.
pub trait TaskStore: Send + Sync {
    /// Loads every task in insertion order.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Missing`] if the collection has never been written
    /// - [`StoreError::Corrupt`] if the stored data cannot be decoded
    /// - [`StoreError::Io`] for other storage failures
    fn read_all(&self) -> BoxFuture<'_, Result<Vec<Task>, StoreError>>;

    /// Replaces the stored collection with `tasks`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] or [`StoreError::Corrupt`] if the
    /// collection cannot be encoded or written.
    fn write_all(&self, tasks: Vec<Task>) -> BoxFuture<'_, Result<(), StoreError>>;
}

/// Returns the id for the next task: one past the largest existing id,
/// or [`TaskId::FIRST`] for an empty collection.
///
/// # Errors
///
/// Returns [`StoreError::IdsExhausted`] if the largest existing id is
/// `u64::MAX`.
pub fn next_id(tasks: &[Task]) -> Result<TaskId, StoreError> {
    match tasks.iter().map(|task| task.id).max() {
        None => Ok(TaskId::FIRST),
        Some(largest) => largest.next().ok_or(StoreError::IdsExhausted(largest)),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn task(id: u64) -> Task {
        Task::new(TaskId::new(id), format!("task {id}"), "description")
    }

    #[rstest]
    fn next_id_of_empty_collection_is_first() {
        assert_eq!(next_id(&[]), Ok(TaskId::FIRST));
    }

    #[rstest]
    #[case(vec![1], 2)]
    #[case(vec![1, 2, 3], 4)]
    #[case(vec![5, 2, 9, 4], 10)]
    fn next_id_is_one_past_maximum(#[case] ids: Vec<u64>, #[case] expected: u64) {
        let tasks: Vec<Task> = ids.into_iter().map(task).collect();
        assert_eq!(next_id(&tasks), Ok(TaskId::new(expected)));
    }

    #[rstest]
    fn next_id_refuses_to_reuse_maximum() {
        let tasks = vec![task(3), task(u64::MAX)];

        assert_eq!(
            next_id(&tasks),
            Err(StoreError::IdsExhausted(TaskId::new(u64::MAX)))
        );
    }

    #[rstest]
    fn io_not_found_maps_to_missing() {
        let error = std::io::Error::from(std::io::ErrorKind::NotFound);
        assert_eq!(StoreError::from(error), StoreError::Missing);
    }

    #[rstest]
    fn other_io_errors_keep_their_message() {
        let error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(matches!(StoreError::from(error), StoreError::Io(message) if message == "denied"));
    }

    proptest! {
        #[test]
        fn next_id_is_unused_and_greater_than_all(ids in prop::collection::vec(1u64..10_000, 0..32)) {
            let tasks: Vec<Task> = ids.iter().copied().map(task).collect();
            let assigned = next_id(&tasks).unwrap();

            prop_assert!(tasks.iter().all(|task| task.id < assigned));
        }
    }
}
