use axum::{
    routing::{get, patch},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/todos",
            get(handlers::todo::list_todos).post(handlers::todo::create_todo),
        )
        .route(
            "/todos/:id",
            patch(handlers::todo::update_todo).delete(handlers::todo::delete_todo),
        )
}
