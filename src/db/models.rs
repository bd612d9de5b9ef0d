use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A task record as stored and as serialized on the wire.
///
/// `id` is assigned by the store on insert and never reused. A task is
/// either active (`is_deleted = false`) or trashed (`is_deleted = true`);
/// hard-deleted tasks no longer exist as rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: i64,
    pub text: String,
    pub completed: bool,
    pub is_deleted: bool,
}

/// Sparse update payload: only fields that are `Some` are written.
///
/// Presence is meaningful per field, so a patch can flip `completed` without
/// touching `text`, or restore a trashed task by setting only `is_deleted`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskPatch {
    pub text: Option<String>,
    pub completed: Option<bool>,
    pub is_deleted: Option<bool>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.completed.is_none() && self.is_deleted.is_none()
    }
}
