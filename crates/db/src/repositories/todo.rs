//! To-do persistence. Every read and mutation here is conjoined with the
//! owner column: an item is never addressable by id alone.

use crate::models::DbTodo;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_todo(pool: &Pool<Postgres>, user_id: Uuid, text: &str) -> Result<DbTodo> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!("Creating todo: id={}, user_id={}", id, user_id);

    let todo = sqlx::query_as::<_, DbTodo>(
        r#"
        INSERT INTO todos (id, user_id, text, completed, created_at)
        VALUES ($1, $2, $3, FALSE, $4)
        RETURNING id, user_id, text, completed, created_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(text)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(todo)
}

/// All items owned by `user_id`, newest first.
pub async fn list_todos_by_owner(pool: &Pool<Postgres>, user_id: Uuid) -> Result<Vec<DbTodo>> {
    let todos = sqlx::query_as::<_, DbTodo>(
        r#"
        SELECT id, user_id, text, completed, created_at
        FROM todos
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(todos)
}

/// Sets the completion flag on an owned item. Returns `None` when no row
/// matches the (id, owner) pair, whether the id is unknown or the item
/// belongs to someone else.
pub async fn set_completed(
    pool: &Pool<Postgres>,
    id: Uuid,
    user_id: Uuid,
    completed: bool,
) -> Result<Option<DbTodo>> {
    tracing::debug!(
        "Updating todo completion: id={}, user_id={}, completed={}",
        id,
        user_id,
        completed
    );

    let todo = sqlx::query_as::<_, DbTodo>(
        r#"
        UPDATE todos
        SET completed = $3
        WHERE id = $1 AND user_id = $2
        RETURNING id, user_id, text, completed, created_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(completed)
    .fetch_optional(pool)
    .await?;

    Ok(todo)
}

/// Deletes an owned item. Returns `false` when no row matched the
/// (id, owner) pair.
pub async fn delete_todo(pool: &Pool<Postgres>, id: Uuid, user_id: Uuid) -> Result<bool> {
    tracing::debug!("Deleting todo: id={}, user_id={}", id, user_id);

    let result = sqlx::query(
        r#"
        DELETE FROM todos
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
