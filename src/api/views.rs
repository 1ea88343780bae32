//! Server-rendered HTML views.
//!
//! Three pages share one layout: the task list, a single task, and the
//! add-task form. Every piece of user-supplied text is escaped before it is
//! interpolated.

use std::fmt::Write as _;

use axum::response::{Html, IntoResponse, Response};
use serde_json::Value;

use crate::domain::Task;

const STYLESHEET_PATH: &str = "/style.css";

/// A page and the data it renders.
#[derive(Debug, Clone, Copy)]
pub enum View<'a> {
    TaskList(&'a [Task]),
    TaskDetail(&'a Task),
    AddForm,
}

impl View<'_> {
    /// Renders the complete HTML document.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::TaskList(tasks) => layout("Tasks", &task_list_body(tasks)),
            Self::TaskDetail(task) => layout(&task.title, &task_detail_body(task)),
            Self::AddForm => layout("Add Task", ADD_FORM_BODY),
        }
    }
}

impl IntoResponse for View<'_> {
    fn into_response(self) -> Response {
        Html(self.render()).into_response()
    }
}

// =============================================================================
// Page Bodies
// =============================================================================

fn task_list_body(tasks: &[Task]) -> String {
    let mut body = String::from("<h1>Tasks</h1>\n");

    if tasks.is_empty() {
        body.push_str("<p class=\"empty\">No tasks yet.</p>\n");
    } else {
        body.push_str("<ul class=\"tasks\">\n");
        for task in tasks {
            let _ = writeln!(
                body,
                "  <li><a href=\"/task?id={id}\">{title}</a> <span class=\"description\">{description}</span></li>",
                id = task.id,
                title = escape_html(&task.title),
                description = escape_html(&task.description),
            );
        }
        body.push_str("</ul>\n");
    }

    body.push_str("<p><a href=\"/add\">Add a task</a></p>\n");
    body
}

fn task_detail_body(task: &Task) -> String {
    let mut body = format!(
        "<h1>{title}</h1>\n<dl class=\"task\">\n  <dt>ID</dt><dd>{id}</dd>\n  <dt>Description</dt><dd>{description}</dd>\n",
        title = escape_html(&task.title),
        id = task.id,
        description = escape_html(&task.description),
    );

    for (key, value) in &task.extra {
        let _ = writeln!(
            body,
            "  <dt>{key}</dt><dd>{value}</dd>",
            key = escape_html(key),
            value = escape_html(&display_value(value)),
        );
    }

    body.push_str("</dl>\n<p><a href=\"/tasks\">Back to tasks</a></p>\n");
    body
}

const ADD_FORM_BODY: &str = r#"<h1>Add Task</h1>
<form method="post" action="/add-task">
  <label for="title">Title</label>
  <input type="text" id="title" name="title" required>
  <label for="description">Description</label>
  <textarea id="description" name="description" required></textarea>
  <button type="submit">Add</button>
</form>
<p><a href="/tasks">Back to tasks</a></p>
"#;

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="{stylesheet}">
</head>
<body>
<main>
{body}</main>
</body>
</html>
"#,
        title = escape_html(title),
        stylesheet = STYLESHEET_PATH,
    )
}

// =============================================================================
// Helpers
// =============================================================================

/// Strings render as-is; any other JSON value renders as its JSON text.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Escapes the five characters with meaning in HTML text and attributes.
///
/// `&` is replaced first so later entities are not double-escaped.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for character in text.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

// =============================================================================
// Tests
// =============================================================================
