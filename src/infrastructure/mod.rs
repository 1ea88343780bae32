//! Infrastructure module for task persistence.
//!
//! The task collection is always read and written as a whole. This module
//! defines the [`TaskStore`] seam and its file-backed and in-memory
//! implementations.

pub mod in_memory;
pub mod json_file;
pub mod repository;

pub use in_memory::InMemoryTaskStore;
pub use json_file::JsonFileTaskStore;
pub use repository::{StoreError, TaskStore, next_id};
