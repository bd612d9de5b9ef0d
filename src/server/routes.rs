use axum::{
    routing::{delete, get},
    Router,
};

use super::handlers;
use super::server::AppState;

/// Create API router with all task endpoints
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/tasks",
            get(handlers::list_tasks).post(handlers::create_task),
        )
        .route("/tasks/deleted", get(handlers::list_deleted_tasks))
        .route(
            "/tasks/:id",
            get(handlers::get_task)
                .put(handlers::update_task)
                .delete(handlers::soft_delete_task),
        )
        .route("/tasks/permanent/:id", delete(handlers::purge_task))
}
