use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use super::models::{CreateTaskRequest, UpdateTaskRequest};
use super::server::AppState;
use crate::error::TaskboardError;
use crate::tasks::TaskManager;

/// Map a store/service error to its HTTP response.
///
/// Every endpoint funnels through the same three-way split: caller input →
/// 400, missing id → 404, anything from the store → 500 with the cause
/// logged here and a generic body.
fn error_response(err: &TaskboardError) -> Response {
    let status = match err {
        TaskboardError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        TaskboardError::TaskNotFound(_) => StatusCode::NOT_FOUND,
        _ => {
            tracing::error!("request failed: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        },
    };

    (status, Json(err.to_error_response())).into_response()
}

/// List active tasks, newest first
pub async fn list_tasks(State(state): State<AppState>) -> Response {
    let task_mgr = TaskManager::new(&state.pool);

    match task_mgr.list_active().await {
        Ok(tasks) => (StatusCode::OK, Json(tasks)).into_response(),
        Err(e) => error_response(&e),
    }
}

/// List trashed tasks, newest first
pub async fn list_deleted_tasks(State(state): State<AppState>) -> Response {
    let task_mgr = TaskManager::new(&state.pool);

    match task_mgr.list_deleted().await {
        Ok(tasks) => (StatusCode::OK, Json(tasks)).into_response(),
        Err(e) => error_response(&e),
    }
}

/// Get a single task by ID
pub async fn get_task(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    let task_mgr = TaskManager::new(&state.pool);

    match task_mgr.get_task(id).await {
        Ok(task) => (StatusCode::OK, Json(task)).into_response(),
        Err(e) => error_response(&e),
    }
}

/// Create a new task
pub async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> Response {
    let task_mgr = TaskManager::new(&state.pool);

    let text = req.text.as_deref().unwrap_or("");
    let completed = req.completed.unwrap_or(false);

    match task_mgr.create_task(text, completed).await {
        Ok(task) => (StatusCode::CREATED, Json(task)).into_response(),
        Err(e) => error_response(&e),
    }
}

/// Apply a partial update to a task
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateTaskRequest>,
) -> Response {
    let task_mgr = TaskManager::new(&state.pool);

    match task_mgr.update_task(id, &req.into_patch()).await {
        Ok(task) => (StatusCode::OK, Json(task)).into_response(),
        Err(e) => error_response(&e),
    }
}

/// Move a task to the trash
pub async fn soft_delete_task(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    let task_mgr = TaskManager::new(&state.pool);

    match task_mgr.soft_delete_task(id).await {
        Ok(task) => (StatusCode::OK, Json(task)).into_response(),
        Err(e) => error_response(&e),
    }
}

/// Permanently delete a task
pub async fn purge_task(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    let task_mgr = TaskManager::new(&state.pool);

    match task_mgr.purge_task(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(&e),
    }
}
