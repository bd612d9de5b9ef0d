use anyhow::{Context, Result};
use axum::{
    http::{Method, StatusCode},
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use serde::Serialize;
use sqlx::SqlitePool;
use std::path::PathBuf;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::db::{create_pool, run_migrations};

/// Server state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

/// Taskboard server instance
pub struct TaskboardServer {
    host: String,
    port: u16,
    db_path: PathBuf,
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    version: String,
}

impl TaskboardServer {
    pub fn new(host: String, port: u16, db_path: PathBuf) -> Self {
        Self {
            host,
            port,
            db_path,
        }
    }

    /// Run the server: open the pool, migrate, bind, serve.
    ///
    /// The pool lives for the lifetime of the process and is dropped when
    /// the server future resolves.
    pub async fn run(self) -> Result<()> {
        let pool = create_pool(&self.db_path)
            .await
            .with_context(|| format!("Failed to open database at {}", self.db_path.display()))?;

        run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;

        let state = AppState { pool };
        let app = create_router(state);

        let addr = format!("{}:{}", self.host, self.port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind to {}", addr))?;

        tracing::info!("Taskboard server listening on {}", addr);
        tracing::info!("Database: {}", self.db_path.display());

        axum::serve(listener, app).await.context("Server error")?;

        Ok(())
    }
}

/// Create the Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    use super::routes;

    let api_routes = Router::new()
        .route("/health", get(health_handler))
        .merge(routes::api_routes());

    Router::new()
        // Root route - serve the single-page client
        .route("/", get(serve_index))
        // Static files under /static prefix
        .nest_service("/static", ServeDir::new(static_dir()))
        // API routes under /api prefix
        .nest("/api", api_routes)
        // Fallback to 404
        .fallback(not_found_handler)
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

fn static_dir() -> PathBuf {
    std::env::current_dir()
        .map(|d| d.join("static"))
        .unwrap_or_else(|_| PathBuf::from("static"))
}

/// Serve the main index.html file
async fn serve_index() -> impl IntoResponse {
    match tokio::fs::read_to_string(static_dir().join("index.html")).await {
        Ok(content) => Html(content).into_response(),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html("<h1>Error: index.html not found</h1>".to_string()),
        )
            .into_response(),
    }
}

/// Health check handler
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "taskboard".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// 404 Not Found handler
async fn not_found_handler() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "error": "Not found"
        })),
    )
}
