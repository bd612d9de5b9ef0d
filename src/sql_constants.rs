//! SQL query constants and fragments
//!
//! Centralizes the column list and base queries for the tasks table so the
//! store, the dynamic UPDATE builder, and the tests all agree on one shape.

/// Standard column list for task queries
///
/// Columns: id, text, completed, is_deleted
pub const TASK_COLUMNS: &str = "id, text, completed, is_deleted";

/// Base SELECT query for tasks. Add WHERE clauses as needed.
pub const SELECT_TASK: &str = const_format::formatcp!("SELECT {} FROM tasks", TASK_COLUMNS);

/// Active view: non-deleted tasks, newest first.
pub const SELECT_ACTIVE_TASKS: &str =
    const_format::formatcp!("{} WHERE is_deleted = 0 ORDER BY id DESC", SELECT_TASK);

/// Trashed view: soft-deleted tasks, newest first.
pub const SELECT_DELETED_TASKS: &str =
    const_format::formatcp!("{} WHERE is_deleted = 1 ORDER BY id DESC", SELECT_TASK);

/// Fetch a single task by ID.
pub const SELECT_TASK_BY_ID: &str = const_format::formatcp!("{} WHERE id = ?", SELECT_TASK);

/// Count all tasks.
pub const COUNT_TASKS_TOTAL: &str = "SELECT COUNT(*) FROM tasks";
