use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum to-do text length, in characters.
pub const TEXT_MAX_LEN: usize = 500;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub user_id: Uuid,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodoRequest {
    pub text: String,
}

/// A missing or non-boolean `completed` field fails deserialization, so
/// invalid update bodies are rejected before any storage access.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodoRequest {
    pub completed: bool,
}

/// Validates and canonicalizes to-do text: trims surrounding whitespace,
/// rejects empty results and anything over [`TEXT_MAX_LEN`] characters.
pub fn validate_todo_text(raw: &str) -> Result<String, String> {
    let text = raw.trim();
    if text.is_empty() {
        return Err("To-do text must not be empty".to_string());
    }
    if text.chars().count() > TEXT_MAX_LEN {
        return Err(format!(
            "To-do text must be at most {TEXT_MAX_LEN} characters"
        ));
    }
    Ok(text.to_string())
}
