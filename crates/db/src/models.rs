use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskdeck_core::models::{todo::Todo, user::User};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUser {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTodo {
    pub id: Uuid,
    pub user_id: Uuid,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl From<DbUser> for User {
    fn from(user: DbUser) -> Self {
        User {
            id: user.id,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

impl From<DbTodo> for Todo {
    fn from(todo: DbTodo) -> Self {
        Todo {
            id: todo.id,
            user_id: todo.user_id,
            text: todo.text,
            completed: todo.completed,
            created_at: todo.created_at,
        }
    }
}
