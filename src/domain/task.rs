//! Task domain model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Field names owned by [`Task`] itself; everything else lands in `extra`.
const RESERVED_FIELDS: [&str; 3] = ["id", "title", "description"];

// =============================================================================
// TaskId
// =============================================================================

/// Positive integer identifier of a task, unique within the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Identifier handed out for the first task of an empty collection.
    pub const FIRST: Self = Self(1);

    /// Creates a `TaskId` from a raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Converts a signed value, rejecting zero, negatives and anything past
    /// `u64::MAX`.
    #[must_use]
    pub fn from_signed(value: i128) -> Option<Self> {
        u64::try_from(value).ok().filter(|value| *value > 0).map(Self)
    }

    /// Returns the identifier immediately after this one, or `None` once
    /// `u64::MAX` has been handed out.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

// =============================================================================
// Task
// =============================================================================

/// A persisted task.
///
/// Any fields submitted besides `title` and `description` are kept in
/// `extra` and flattened back into the task's JSON object on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Task {
    /// Creates a task without extra fields.
    #[must_use]
    pub fn new(id: TaskId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            extra: Map::new(),
        }
    }

    /// Adds an extra field. Reserved names are ignored.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if !RESERVED_FIELDS.contains(&key.as_str()) {
            self.extra.insert(key, value.into());
        }
        self
    }
}

// =============================================================================
// NewTask
// =============================================================================

/// Reasons a submission cannot become a task.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `title` or `description` is absent, empty, or not text.
    #[error("Title and description are required")]
    MissingRequiredField { field: &'static str },
}

/// A validated submission that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    title: String,
    description: String,
    extra: Map<String, Value>,
}

impl NewTask {
    /// Validates submitted fields.
    ///
    /// `title` and `description` must be non-empty strings. A submitted `id`
    /// is discarded; the store assigns its own.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingRequiredField`] naming the first
    /// required field that is missing.
    pub fn from_fields(mut fields: Map<String, Value>) -> Result<Self, ValidationError> {
        let title = take_required(&mut fields, "title")?;
        let description = take_required(&mut fields, "description")?;
        fields.remove("id");

        Ok(Self {
            title,
            description,
            extra: fields,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Assigns `id` and produces the task to persist.
    #[must_use]
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            extra: self.extra,
        }
    }
}

fn take_required(
    fields: &mut Map<String, Value>,
    field: &'static str,
) -> Result<String, ValidationError> {
    match fields.remove(field) {
        Some(Value::String(text)) if !text.is_empty() => Ok(text),
        _ => Err(ValidationError::MissingRequiredField { field }),
    }
}

// =============================================================================
// Tests
// =============================================================================
