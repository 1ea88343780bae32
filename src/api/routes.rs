//! Routing definitions for the task board.
//!
//! Requests that match no route fall through to the static asset
//! directory.

use std::path::Path;

use axum::Router;
use axum::routing::{get, post};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::middleware::RequestLogLayer;
use super::state::AppState;

// =============================================================================
// Router Creation
// =============================================================================

/// Creates the application router with all routes and middleware.
///
/// # Arguments
///
/// * `state` - Application state holding the task store
/// * `public_dir` - Directory whose files are served verbatim
///
/// # Examples
///
/// ```ignore
/// use task_board::api::{AppState, create_router};
/// use task_board::infrastructure::JsonFileTaskStore;
///
/// let state = AppState::new(JsonFileTaskStore::new("tasks.json"));
/// let router = create_router(state, Path::new("public"));
///
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
/// axum::serve(listener, router).await?;
/// ```
pub fn create_router(state: AppState, public_dir: &Path) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/tasks", get(handlers::list_tasks))
        .route("/task", get(handlers::get_task))
        .route("/add", get(handlers::add_form))
        .route("/add-task", post(handlers::add_task))
        .fallback_service(ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http())
        .layer(RequestLogLayer::new())
        .with_state(state)
}

// =============================================================================
// Tests
// =============================================================================
