//! API error handling.
//!
//! Every error reaches the client as a short plain-text body with the
//! matching status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::domain::ValidationError;
use crate::infrastructure::StoreError;

// =============================================================================
// ApiError
// =============================================================================

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The `id` query parameter is missing or not an integer.
    #[error("Invalid task ID")]
    InvalidTaskId,

    /// No task carries the requested id.
    #[error("Task not found")]
    TaskNotFound,

    /// The submission lacks a required field.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request body could not be decoded.
    #[error("Invalid request body")]
    InvalidBody { reason: String },

    /// The collection could not be written back.
    #[error("Failed to save task")]
    Persistence(#[source] StoreError),
}

impl ApiError {
    #[must_use]
    pub fn invalid_body(reason: impl Into<String>) -> Self {
        Self::InvalidBody {
            reason: reason.into(),
        }
    }

    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidTaskId | Self::Validation(_) | Self::InvalidBody { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::TaskNotFound => StatusCode::NOT_FOUND,
            Self::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        Self::Persistence(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        match &self {
            Self::Persistence(source) => tracing::error!(error = %source, "Failed to persist tasks"),
            Self::InvalidBody { reason } => tracing::debug!(%reason, "Rejected request body"),
            _ => {}
        }

        (status_code, self.to_string()).into_response()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::CONTENT_TYPE;
    use http_body_util::BodyExt;
    use rstest::rstest;

    #[rstest]
    #[case(ApiError::InvalidTaskId, StatusCode::BAD_REQUEST, "Invalid task ID")]
    #[case(ApiError::TaskNotFound, StatusCode::NOT_FOUND, "Task not found")]
    #[case(
        ApiError::Validation(ValidationError::MissingRequiredField { field: "title" }),
        StatusCode::BAD_REQUEST,
        "Title and description are required"
    )]
    #[case(ApiError::invalid_body("EOF"), StatusCode::BAD_REQUEST, "Invalid request body")]
    #[case(
        ApiError::Persistence(StoreError::Io("disk full".to_string())),
        StatusCode::INTERNAL_SERVER_ERROR,
        "Failed to save task"
    )]
    #[tokio::test]
    async fn renders_plain_text(
        #[case] error: ApiError,
        #[case] status: StatusCode,
        #[case] body: &str,
    ) {
        let response = error.into_response();

        assert_eq!(response.status(), status);
        assert!(
            response.headers()[CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/plain")
        );

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(bytes.as_ref(), body.as_bytes());
    }

    #[rstest]
    fn store_errors_become_persistence_failures() {
        let error: ApiError = StoreError::Missing.into();
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
