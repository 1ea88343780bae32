//! Common test helpers for integration tests.
//!
//! # Note
//!
//! The `#![allow(dead_code)]` attribute is necessary because Rust compiles each
//! integration test file as a separate crate, and not every file uses every
//! helper.

#![allow(dead_code)]

use std::path::PathBuf;

use axum::Router;
use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, LOCATION};
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use task_board::api::{AppState, create_router};
use task_board::infrastructure::JsonFileTaskStore;

// =============================================================================
// Test Application
// =============================================================================

/// A router wired to a JSON file in its own temporary directory.
pub struct TestApp {
    pub router: Router,
    pub store: JsonFileTaskStore,
    directory: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        let directory = TempDir::new().expect("Failed to create temp dir");
        let public_dir = directory.path().join("public");
        std::fs::create_dir_all(&public_dir).expect("Failed to create public dir");

        let store = JsonFileTaskStore::new(directory.path().join("tasks.json"));
        let router = create_router(AppState::new(store.clone()), &public_dir);

        Self {
            router,
            store,
            directory,
        }
    }

    pub fn tasks_file(&self) -> PathBuf {
        self.store.path().to_path_buf()
    }

    pub fn public_dir(&self) -> PathBuf {
        self.directory.path().join("public")
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_form(&self, uri: &str, body: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn post_json(&self, uri: &str, body: &serde_json::Value) -> TestResponse {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router call failed");

        let status = response.status();
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();

        TestResponse {
            status,
            location,
            content_type,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    /// Reads the backing document as raw JSON.
    pub fn stored_json(&self) -> serde_json::Value {
        let contents = std::fs::read_to_string(self.tasks_file()).expect("tasks file missing");
        serde_json::from_str(&contents).expect("tasks file is not JSON")
    }
}

// =============================================================================
// Test Response
// =============================================================================

pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

impl TestResponse {
    pub fn assert_redirects_to(&self, location: &str) {
        assert_eq!(self.status, StatusCode::FOUND, "body: {}", self.body);
        assert_eq!(self.location.as_deref(), Some(location));
    }

    pub fn assert_html(&self) {
        assert_eq!(self.status, StatusCode::OK, "body: {}", self.body);
        let content_type = self.content_type.as_deref().unwrap_or_default();
        assert!(content_type.starts_with("text/html"), "content type: {content_type}");
    }

    pub fn assert_plain_text(&self, status: StatusCode, body: &str) {
        assert_eq!(self.status, status);
        let content_type = self.content_type.as_deref().unwrap_or_default();
        assert!(content_type.starts_with("text/plain"), "content type: {content_type}");
        assert_eq!(self.body, body);
    }
}
