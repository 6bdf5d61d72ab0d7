//! Route handlers.

use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::Html,
    Form, Json,
};
use serde::{Deserialize, Serialize};

use super::state::AppState;
use crate::error::Error;
use crate::tasks::Task;

// ============================================================================
// Request/Response DTOs
// ============================================================================

/// Form body of `POST /add_task`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct AddTaskForm {
    /// Description of the task to add.
    pub task: Option<String>,
}

impl AddTaskForm {
    /// Build the form from raw key/value pairs.
    ///
    /// When `task` appears more than once, the first occurrence wins.
    #[must_use]
    pub fn from_fields(fields: Vec<(String, String)>) -> Self {
        let task = fields.into_iter().find(|(key, _)| key == "task").map(|(_, value)| value);
        Self { task }
    }
}

/// JSON status payload returned by the mutating endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResponse {
    /// Whether the operation took effect.
    pub success: bool,
    /// Description of the added task.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    /// Why the operation was rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TaskResponse {
    /// Plain success with no payload.
    #[must_use]
    pub const fn ok() -> Self {
        Self { success: true, task: None, error: None }
    }

    /// Success carrying the added task's description.
    #[must_use]
    pub fn added(task: &Task) -> Self {
        Self { success: true, task: Some(task.description.clone()), error: None }
    }

    /// Failure carrying the error message.
    #[must_use]
    pub fn rejected(error: &Error) -> Self {
        Self { success: false, task: None, error: Some(error.to_string()) }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// `GET /`: the task list page.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let tasks = state.store.list();
    state.templates.render_index(&tasks).map(Html).map_err(|e| {
        tracing::error!(error = %e, "failed to render task list");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// `POST /add_task`: append a task.
///
/// A missing or unparseable form body is treated the same as a missing
/// `task` field. Rejections are reported in the body with status 200.
pub async fn add_task(
    State(state): State<AppState>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Json<TaskResponse> {
    let form = match form {
        Ok(Form(fields)) => AddTaskForm::from_fields(fields),
        Err(rejection) => {
            tracing::debug!(%rejection, "add_task body not usable as a form");
            AddTaskForm::default()
        }
    };

    match state.store.add(form.task.as_deref()) {
        Ok(task) => {
            tracing::info!(id = task.id, "task added");
            Json(TaskResponse::added(&task))
        }
        Err(e) => {
            tracing::info!(error = %e, "task rejected");
            Json(TaskResponse::rejected(&e))
        }
    }
}

/// `POST /clear_tasks`: remove every task.
pub async fn clear_tasks(State(state): State<AppState>) -> Json<TaskResponse> {
    state.store.clear();
    tracing::info!("tasks cleared");
    Json(TaskResponse::ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn test_form_takes_first_task_field() {
        let form = AddTaskForm::from_fields(fields(&[("task", "first"), ("task", "second")]));
        assert_eq!(form.task.as_deref(), Some("first"));
    }

    #[test]
    fn test_form_first_empty_task_field_wins() {
        let form = AddTaskForm::from_fields(fields(&[("task", ""), ("task", "second")]));
        assert_eq!(form.task.as_deref(), Some(""));
    }

    #[test]
    fn test_form_without_task_field() {
        let form = AddTaskForm::from_fields(fields(&[("other", "x")]));
        assert_eq!(form, AddTaskForm::default());
    }

    #[test]
    fn test_ok_response_shape() {
        let json = serde_json::to_value(TaskResponse::ok()).unwrap();
        assert_eq!(json, serde_json::json!({"success": true}));
    }

    #[test]
    fn test_added_response_shape() {
        let json = serde_json::to_value(TaskResponse::added(&Task::new(4, "Write tests"))).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "task": "Write tests"}));
    }

    #[test]
    fn test_rejected_response_shape() {
        let json = serde_json::to_value(TaskResponse::rejected(&Error::EmptyTask)).unwrap();
        assert_eq!(json, serde_json::json!({"success": false, "error": "No task provided"}));
    }
}
