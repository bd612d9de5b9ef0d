use serde::Deserialize;

/// Create task request
///
/// `text` is optional at the deserialization layer so a missing field maps
/// to a 400 validation error instead of a body-rejection.
#[derive(Deserialize)]
pub struct CreateTaskRequest {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

/// Update task request: a sparse patch, any subset of the three fields.
#[derive(Deserialize)]
pub struct UpdateTaskRequest {
    pub text: Option<String>,
    pub completed: Option<bool>,
    pub is_deleted: Option<bool>,
}

impl UpdateTaskRequest {
    pub fn into_patch(self) -> crate::db::models::TaskPatch {
        crate::db::models::TaskPatch {
            text: self.text,
            completed: self.completed,
            is_deleted: self.is_deleted,
        }
    }
}
