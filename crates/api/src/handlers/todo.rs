use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use std::sync::Arc;
use taskdeck_core::{
    errors::TaskError,
    models::{
        todo::{validate_todo_text, CreateTodoRequest, Todo, UpdateTodoRequest},
        Envelope, MessageResponse,
    },
};
use uuid::Uuid;

use crate::{
    middleware::{auth::AuthUser, error_handling::AppError},
    ApiState,
};

#[axum::debug_handler]
pub async fn list_todos(
    State(state): State<Arc<ApiState>>,
    caller: AuthUser,
) -> Result<Json<Envelope<Vec<Todo>>>, AppError> {
    let todos = taskdeck_db::repositories::todo::list_todos_by_owner(&state.db_pool, caller.id)
        .await
        .map_err(TaskError::Database)?;

    Ok(Json(Envelope::new(
        todos.into_iter().map(Todo::from).collect(),
    )))
}

#[axum::debug_handler]
pub async fn create_todo(
    State(state): State<Arc<ApiState>>,
    caller: AuthUser,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<Json<Envelope<Todo>>, AppError> {
    let Json(payload) =
        payload.map_err(|_| TaskError::Validation("To-do text is required".to_string()))?;

    let text = validate_todo_text(&payload.text).map_err(TaskError::Validation)?;

    let todo = taskdeck_db::repositories::todo::create_todo(&state.db_pool, caller.id, &text)
        .await
        .map_err(TaskError::Database)?;

    Ok(Json(Envelope::new(todo.into())))
}

#[axum::debug_handler]
pub async fn update_todo(
    State(state): State<Arc<ApiState>>,
    caller: AuthUser,
    Path(id): Path<Uuid>,
    payload: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<Json<Envelope<Todo>>, AppError> {
    let Json(payload) = payload
        .map_err(|_| TaskError::Validation("The completed field must be a boolean".to_string()))?;

    // A wrong id and another owner's id both read as a plain not-found, so
    // the response never confirms a foreign item exists
    let todo = taskdeck_db::repositories::todo::set_completed(
        &state.db_pool,
        id,
        caller.id,
        payload.completed,
    )
    .await
    .map_err(TaskError::Database)?
    .ok_or_else(|| TaskError::NotFound("To-do not found".to_string()))?;

    Ok(Json(Envelope::new(todo.into())))
}

#[axum::debug_handler]
pub async fn delete_todo(
    State(state): State<Arc<ApiState>>,
    caller: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    let deleted = taskdeck_db::repositories::todo::delete_todo(&state.db_pool, id, caller.id)
        .await
        .map_err(TaskError::Database)?;

    if !deleted {
        return Err(TaskError::NotFound("To-do not found".to_string()).into());
    }

    Ok(Json(MessageResponse {
        message: "To-do deleted".to_string(),
    }))
}
