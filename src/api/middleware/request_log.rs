//! Request logging middleware.
//!
//! Emits one `tracing` event per request before the handler runs, carrying
//! an RFC 3339 timestamp, the method and the path with its query string.

use std::task::{Context, Poll};

use axum::http::{Method, Request, Uri};
use chrono::{DateTime, SecondsFormat, Utc};
use tower::{Layer, Service};

// =============================================================================
// RequestLogLayer
// =============================================================================

/// Layer that logs every inbound request.
///
/// The request and response pass through untouched.
///
/// # Examples
///
/// ```ignore
/// use task_board::api::middleware::RequestLogLayer;
///
/// let app = Router::new()
///     .route("/tasks", get(list_tasks))
///     .layer(RequestLogLayer::new());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestLogLayer;

impl RequestLogLayer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl<InnerService> Layer<InnerService> for RequestLogLayer {
    type Service = RequestLogService<InnerService>;

    fn layer(&self, inner: InnerService) -> Self::Service {
        RequestLogService { inner }
    }
}

// =============================================================================
// RequestLogService
// =============================================================================

#[derive(Debug, Clone)]
pub struct RequestLogService<InnerService> {
    inner: InnerService,
}

impl<InnerService, RequestBody> Service<Request<RequestBody>> for RequestLogService<InnerService>
where
    InnerService: Service<Request<RequestBody>>,
{
    type Response = InnerService::Response;
    type Error = InnerService::Error;
    type Future = InnerService::Future;

    fn poll_ready(&mut self, context: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(context)
    }

    fn call(&mut self, request: Request<RequestBody>) -> Self::Future {
        let line = request_line(Utc::now(), request.method(), request.uri());
        tracing::info!(
            method = %request.method(),
            path = %request.uri().path(),
            "{line}"
        );

        self.inner.call(request)
    }
}

/// Formats `[timestamp] METHOD /path?query`.
#[must_use]
pub fn request_line(timestamp: DateTime<Utc>, method: &Method, uri: &Uri) -> String {
    let target = uri
        .path_and_query()
        .map_or_else(|| uri.path(), |path_and_query| path_and_query.as_str());

    format!(
        "[{}] {} {}",
        timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        method,
        target
    )
}

// =============================================================================
// Tests
// =============================================================================
