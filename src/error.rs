use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskboardError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Task not found: {0}")]
    TaskNotFound(i64),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Wire-format error body: `{"error": "..."}`.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl TaskboardError {
    /// Build the client-facing error body.
    ///
    /// Store and IO failures are reported with a generic message; the
    /// underlying cause is logged at the call site, never sent to the caller.
    pub fn to_error_response(&self) -> ErrorResponse {
        let error = match self {
            TaskboardError::TaskNotFound(_) | TaskboardError::InvalidInput(_) => self.to_string(),
            _ => "Internal server error".to_string(),
        };
        ErrorResponse { error }
    }
}

pub type Result<T> = std::result::Result<T, TaskboardError>;
