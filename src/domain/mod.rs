//! Domain model for the task board.
//!
//! The only entity is [`Task`]. Tasks are created from a validated
//! [`NewTask`] and are never mutated afterwards.

mod task;

pub use task::{NewTask, Task, TaskId, ValidationError};
