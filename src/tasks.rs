use crate::db::models::{Task, TaskPatch};
use crate::error::{Result, TaskboardError};
use crate::sql_constants::{
    SELECT_ACTIVE_TASKS, SELECT_DELETED_TASKS, SELECT_TASK_BY_ID,
};
use sqlx::SqlitePool;

/// Store-facing task operations.
///
/// Holds a borrowed pool handle; constructed per request by the HTTP layer
/// and per command by the CLI, so there is no module-level connection state.
pub struct TaskManager<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TaskManager<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List active tasks, newest first.
    pub async fn list_active(&self) -> Result<Vec<Task>> {
        let tasks = sqlx::query_as::<_, Task>(SELECT_ACTIVE_TASKS)
            .fetch_all(self.pool)
            .await?;

        Ok(tasks)
    }

    /// List trashed tasks, newest first.
    pub async fn list_deleted(&self) -> Result<Vec<Task>> {
        let tasks = sqlx::query_as::<_, Task>(SELECT_DELETED_TASKS)
            .fetch_all(self.pool)
            .await?;

        Ok(tasks)
    }

    /// Get a task by ID
    pub async fn get_task(&self, id: i64) -> Result<Task> {
        let task = sqlx::query_as::<_, Task>(SELECT_TASK_BY_ID)
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(TaskboardError::TaskNotFound(id))?;

        Ok(task)
    }

    /// Create a new active task.
    ///
    /// Whitespace-only text is rejected; the stored text is kept verbatim.
    pub async fn create_task(&self, text: &str, completed: bool) -> Result<Task> {
        if text.trim().is_empty() {
            return Err(TaskboardError::InvalidInput(
                "task text is required".to_string(),
            ));
        }

        let result = sqlx::query(
            r#"
            INSERT INTO tasks (text, completed, is_deleted)
            VALUES (?, ?, 0)
            "#,
        )
        .bind(text)
        .bind(completed)
        .execute(self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.get_task(id).await
    }

    /// Apply a sparse patch to a task.
    ///
    /// Only fields present in the patch are written; an empty patch is a
    /// caller error. Restoring a trashed task is a patch with
    /// `is_deleted: false`.
    pub async fn update_task(&self, id: i64, patch: &TaskPatch) -> Result<Task> {
        if patch.is_empty() {
            return Err(TaskboardError::InvalidInput(
                "at least one of text, completed, is_deleted is required".to_string(),
            ));
        }

        if let Some(text) = &patch.text {
            if text.trim().is_empty() {
                return Err(TaskboardError::InvalidInput(
                    "task text must not be empty".to_string(),
                ));
            }
        }

        // Build dynamic update query using QueryBuilder for SQL injection safety
        let mut builder: sqlx::QueryBuilder<sqlx::Sqlite> =
            sqlx::QueryBuilder::new("UPDATE tasks SET ");
        let mut has_updates = false;

        if let Some(text) = &patch.text {
            builder.push("text = ").push_bind(text);
            has_updates = true;
        }

        if let Some(completed) = patch.completed {
            if has_updates {
                builder.push(", ");
            }
            builder.push("completed = ").push_bind(completed);
            has_updates = true;
        }

        if let Some(is_deleted) = patch.is_deleted {
            if has_updates {
                builder.push(", ");
            }
            builder.push("is_deleted = ").push_bind(is_deleted);
        }

        builder.push(" WHERE id = ").push_bind(id);

        let result = builder.build().execute(self.pool).await?;

        // Zero rows matched means the id does not exist; store failures have
        // already propagated as DatabaseError above.
        if result.rows_affected() == 0 {
            return Err(TaskboardError::TaskNotFound(id));
        }

        self.get_task(id).await
    }

    /// Move a task to the trash. The record survives and can be restored.
    pub async fn soft_delete_task(&self, id: i64) -> Result<Task> {
        self.update_task(
            id,
            &TaskPatch {
                is_deleted: Some(true),
                ..Default::default()
            },
        )
        .await
    }

    /// Irreversibly remove a task, whatever its lifecycle state.
    pub async fn purge_task(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(TaskboardError::TaskNotFound(id));
        }

        Ok(())
    }
}
