//! HTTP handlers for the task board.
//!
//! Each request re-reads the whole collection from the store. Only
//! [`add_task`] writes.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::http::header::LOCATION;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use super::error::ApiError;
use super::state::AppState;
use super::submission::TaskSubmission;
use super::views::View;
use crate::domain::{NewTask, Task, TaskId};
use crate::infrastructure::{StoreError, TaskStore, next_id};

const TASKS_PATH: &str = "/tasks";

// =============================================================================
// Helpers
// =============================================================================

/// `302 Found` pointing at `location`.
fn found(location: &'static str) -> Response {
    (StatusCode::FOUND, [(LOCATION, location)]).into_response()
}

/// Reads the collection, treating every read failure as "no tasks".
///
/// A missing document is the normal first-run state; anything else is
/// logged but still rendered as an empty list.
pub async fn load_tasks(store: &dyn TaskStore) -> Vec<Task> {
    match store.read_all().await {
        Ok(tasks) => tasks,
        Err(StoreError::Missing) => {
            tracing::debug!("Task document absent, starting empty");
            Vec::new()
        }
        Err(error) => {
            tracing::warn!(%error, "Task document unreadable, treating as empty");
            Vec::new()
        }
    }
}

/// Parses the raw `id` query value.
///
/// Anything that is not an integer is [`ApiError::InvalidTaskId`]; an
/// integer that cannot be a task id (zero or negative) simply matches
/// nothing.
fn parse_task_id(raw: Option<&str>) -> Result<Option<TaskId>, ApiError> {
    let value = raw
        .map(str::trim)
        .and_then(|raw| raw.parse::<i128>().ok())
        .ok_or(ApiError::InvalidTaskId)?;

    Ok(TaskId::from_signed(value))
}

// =============================================================================
// GET / Handler
// =============================================================================

#[allow(clippy::unused_async)]
pub async fn index() -> Response {
    found(TASKS_PATH)
}

// =============================================================================
// GET /tasks Handler
// =============================================================================

pub async fn list_tasks(State(state): State<AppState>) -> Response {
    let tasks = load_tasks(state.store.as_ref()).await;
    View::TaskList(&tasks).into_response()
}

// =============================================================================
// GET /task?id=<n> Handler
// =============================================================================

/// Query pairs of `/task`, in request order.
///
/// Kept as raw pairs so that a repeated `id` is not a deserialization
/// failure; the first occurrence is the one looked up.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct TaskQuery(pub Vec<(String, String)>);

impl TaskQuery {
    /// Returns the first `id` value, if any.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == "id")
            .map(|(_, value)| value.as_str())
    }
}

/// Shows one task.
///
/// # Errors
///
/// - [`ApiError::InvalidTaskId`] (400) if `id` is missing or not an integer
/// - [`ApiError::TaskNotFound`] (404) if no task has that id
pub async fn get_task(
    State(state): State<AppState>,
    query: Result<Query<TaskQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query.map_err(|rejection| {
        tracing::debug!(reason = %rejection.body_text(), "Rejected task query");
        ApiError::InvalidTaskId
    })?;
    let task_id = parse_task_id(query.id())?;
    let tasks = load_tasks(state.store.as_ref()).await;

    let task = task_id
        .and_then(|task_id| tasks.iter().find(|task| task.id == task_id))
        .ok_or(ApiError::TaskNotFound)?;

    Ok(View::TaskDetail(task).into_response())
}

// =============================================================================
// GET /add Handler
// =============================================================================

#[allow(clippy::unused_async)]
pub async fn add_form() -> Response {
    View::AddForm.into_response()
}

// =============================================================================
// POST /add-task Handler
// =============================================================================

/// Validates a submission, appends it with the next id and persists the
/// collection, then redirects to the list.
///
/// # Errors
///
/// - [`ApiError::Validation`] (400) if `title` or `description` is missing
/// - [`ApiError::InvalidBody`] (400) if the body cannot be decoded
/// - [`ApiError::Persistence`] (500) if no id is left to assign or the store
///   write fails
pub async fn add_task(
    State(state): State<AppState>,
    submission: TaskSubmission,
) -> Result<Response, ApiError> {
    let new_task = NewTask::from_fields(submission.into_fields())?;

    let _guard = state.add_lock.lock().await;

    let mut tasks = load_tasks(state.store.as_ref()).await;
    let task = new_task.into_task(next_id(&tasks)?);
    tracing::info!(task_id = %task.id, title = %task.title, "Task created");
    tasks.push(task);

    state.store.write_all(tasks).await?;

    Ok(found(TASKS_PATH))
}

// =============================================================================
// Tests
// =============================================================================
