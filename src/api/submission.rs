//! Extractor for task submissions.
//!
//! `POST /add-task` accepts either an HTML form (`application/x-www-form-urlencoded`)
//! or a JSON object. Both are normalised into the same field map; a body
//! with any other content type yields no fields at all, which then fails
//! validation.

use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};
use serde_json::{Map, Value};

use super::error::ApiError;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Raw submitted fields, in submission order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskSubmission(pub Map<String, Value>);

impl TaskSubmission {
    #[must_use]
    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(request: &Request) -> BodyKind {
    let Some(content_type) = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return BodyKind::Other;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if essence == "application/json" || essence.ends_with("+json") {
        BodyKind::Json
    } else if essence == FORM_CONTENT_TYPE {
        BodyKind::Form
    } else {
        BodyKind::Other
    }
}

/// Folds form pairs into a field map. A key that appears more than once
/// becomes an array of its values in submission order.
fn collect_pairs(pairs: Vec<(String, String)>) -> Map<String, Value> {
    let mut fields = Map::new();

    for (key, value) in pairs {
        let value = Value::String(value);
        match fields.get_mut(&key) {
            Some(Value::Array(values)) => values.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None => {
                fields.insert(key, value);
            }
        }
    }

    fields
}

impl<State> FromRequest<State> for TaskSubmission
where
    State: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(request: Request, state: &State) -> Result<Self, Self::Rejection> {
        match body_kind(&request) {
            BodyKind::Json => {
                let Json(value) = Json::<Value>::from_request(request, state)
                    .await
                    .map_err(|rejection| ApiError::invalid_body(rejection.body_text()))?;

                match value {
                    Value::Object(fields) => Ok(Self(fields)),
                    _ => Err(ApiError::invalid_body("expected a JSON object")),
                }
            }
            BodyKind::Form => {
                let Form(pairs) = Form::<Vec<(String, String)>>::from_request(request, state)
                    .await
                    .map_err(|rejection| ApiError::invalid_body(rejection.body_text()))?;

                Ok(Self(collect_pairs(pairs)))
            }
            BodyKind::Other => Ok(Self::default()),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
