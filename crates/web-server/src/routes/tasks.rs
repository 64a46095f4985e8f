//! Task page endpoints
//!
//! A single server-rendered page: the task form, the task table, and the
//! alert banners. Form posts and the edit/delete links all land back here
//! and the page is re-rendered in place, no redirects.

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Form, Router,
};
use serde::Deserialize;

use taskman_core::task::{Task, TaskStatus};

use crate::state::AppState;

const MSG_ADDED: &str = "Task added successfully!";
const MSG_UPDATED: &str = "Task updated successfully!";
const MSG_DELETED: &str = "Task deleted successfully!";
const MSG_NOT_FOUND: &str = "Task not found.";

/// Description cell width in the task table.
const DESCRIPTION_PREVIEW_CHARS: usize = 50;

// ============================================================================
// Request types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    action: Option<String>,
    #[serde(default)]
    id: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct TaskForm {
    action: String,
    #[serde(default)]
    id: Option<u64>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    date: String,
    #[serde(default)]
    status: String,
}

// ============================================================================
// View models
// ============================================================================

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    message: Option<String>,
    errors: Vec<String>,
    edit_task: Option<EditView>,
    status_options: Vec<StatusOption>,
    tasks: Vec<TaskRow>,
}

/// Form values when editing an existing task.
struct EditView {
    id: u64,
    title: String,
    description: String,
    date: String,
}

struct StatusOption {
    label: &'static str,
    selected: bool,
}

/// One row of the task table, pre-formatted for display.
struct TaskRow {
    id: u64,
    title: String,
    description: String,
    date_display: String,
    status_label: &'static str,
    badge_class: &'static str,
}

impl From<Task> for TaskRow {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: preview(&task.description, DESCRIPTION_PREVIEW_CHARS),
            date_display: task.date.format("%b %-d, %Y").to_string(),
            status_label: task.status.as_str(),
            badge_class: task.status.badge_class(),
        }
    }
}

fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}

fn status_options(selected: TaskStatus) -> Vec<StatusOption> {
    TaskStatus::ALL
        .iter()
        .map(|status| StatusOption {
            label: status.as_str(),
            selected: *status == selected,
        })
        .collect()
}

// ============================================================================
// Handlers
// ============================================================================

/// GET / - task listing, plus the `edit` and `delete` link actions
async fn index(State(state): State<AppState>, Query(query): Query<PageQuery>) -> Html<String> {
    let mut message = None;
    let mut errors = Vec::new();
    let mut edit_task = None;

    match query.action.as_deref() {
        Some("edit") => {
            let id = query.id.unwrap_or(0);
            match state.repository().get_by_id(id).await {
                Some(task) => edit_task = Some(task),
                None => errors.push(MSG_NOT_FOUND.to_string()),
            }
        }
        Some("delete") => {
            let id = query.id.unwrap_or(0);
            match state.repository().delete(id).await {
                Ok(()) => message = Some(MSG_DELETED.to_string()),
                Err(e) => errors = e.messages(),
            }
        }
        _ => {}
    }

    render_page(&state, message, errors, edit_task).await
}

/// POST / - add and update form submissions
async fn submit(State(state): State<AppState>, Form(form): Form<TaskForm>) -> Html<String> {
    // The form only offers the known statuses; anything else degrades to
    // the default rather than failing the request.
    let status: TaskStatus = form.status.parse().unwrap_or_default();

    let mut message = None;
    let mut errors = Vec::new();

    match form.action.as_str() {
        "add" => {
            match state
                .repository()
                .create(&form.title, &form.description, &form.date, status)
                .await
            {
                Ok(_) => message = Some(MSG_ADDED.to_string()),
                Err(e) => errors = e.messages(),
            }
        }
        "update" => {
            let id = form.id.unwrap_or(0);
            match state
                .repository()
                .update(id, &form.title, &form.description, &form.date, status)
                .await
            {
                Ok(_) => message = Some(MSG_UPDATED.to_string()),
                Err(e) => errors = e.messages(),
            }
        }
        _ => {}
    }

    render_page(&state, message, errors, None).await
}

async fn render_page(
    state: &AppState,
    message: Option<String>,
    errors: Vec<String>,
    edit_task: Option<Task>,
) -> Html<String> {
    let tasks = state.repository().list_all().await;
    let selected = edit_task.as_ref().map(|t| t.status).unwrap_or_default();

    let template = IndexTemplate {
        message,
        errors,
        status_options: status_options(selected),
        edit_task: edit_task.map(|task| EditView {
            id: task.id,
            title: task.title,
            description: task.description,
            date: task.date.to_string(),
        }),
        tasks: tasks.into_iter().map(TaskRow::from).collect(),
    };

    match template.render() {
        Ok(html) => Html(html),
        Err(e) => {
            tracing::error!(error = %e, "template rendering failed");
            Html("Internal server error".to_string())
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index).post(submit))
}
