//! API module for HTTP handlers.
//!
//! This module contains route definitions, handlers, views and middleware.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod submission;
pub mod views;

pub use error::ApiError;
pub use handlers::{add_form, add_task, get_task, index, list_tasks, load_tasks};
pub use routes::create_router;
pub use state::AppState;
pub use submission::TaskSubmission;
pub use views::View;
