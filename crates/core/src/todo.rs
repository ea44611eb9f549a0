use crate::error::ApiError;
use crate::fields::{bool_field, optional_bool_field, string_field, Fields};
use crate::timestamp::CreatedAt;
use serde::{Deserialize, Serialize};

/// A task record with completion status
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub completed: bool,
    pub created_at: String,
}

impl CreatedAt for Todo {
    fn created_at(&self) -> &str {
        &self.created_at
    }
}

/// Validated body of `POST /api/todos`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub text: String,
    pub completed: bool,
}

impl NewTodo {
    /// `text` is required, `completed` defaults to `false`
    pub fn from_fields(fields: &Fields) -> Result<Self, ApiError> {
        let text = string_field(fields, "text")?;
        let completed = optional_bool_field(fields, "completed")?.unwrap_or(false);
        Ok(Self { text, completed })
    }
}

/// Validated body of `PATCH /api/todos/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoPatch {
    pub completed: bool,
}

impl TodoPatch {
    pub fn from_fields(fields: &Fields) -> Result<Self, ApiError> {
        Ok(Self {
            completed: bool_field(fields, "completed")?,
        })
    }
}

/// The three todos every fresh store starts with
pub fn seed_todos() -> Vec<Todo> {
    [
        (1, "Complete portfolio website", false, "2024-07-09T10:00:00Z"),
        (2, "Study JavaScript concepts", true, "2024-07-09T09:00:00Z"),
        (3, "Apply for internships", false, "2024-07-09T08:00:00Z"),
    ]
    .into_iter()
    .map(|(id, text, completed, created_at)| Todo {
        id,
        text: text.to_string(),
        completed,
        created_at: created_at.to_string(),
    })
    .collect()
}
