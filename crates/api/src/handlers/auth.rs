use axum::extract::{rejection::JsonRejection, State};
use axum::Json;
use std::sync::Arc;
use taskdeck_core::{
    errors::TaskError,
    models::{
        user::{
            is_valid_email, normalize_email, AuthData, LoginRequest, RegisterRequest, UserData,
            MIN_PASSWORD_LEN,
        },
        Envelope,
    },
};

use crate::{
    middleware::{auth, auth::AuthUser, error_handling::AppError},
    ApiState,
};

/// Returned for unknown email and wrong password alike, so the response
/// never confirms which of the two failed.
const BAD_CREDENTIALS: &str = "Invalid email or password";

#[axum::debug_handler]
pub async fn register(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<Envelope<AuthData>>, AppError> {
    let Json(payload) = payload
        .map_err(|_| TaskError::Validation("Email and password are required".to_string()))?;

    let email = normalize_email(&payload.email);
    if !is_valid_email(&email) {
        return Err(TaskError::Validation("A valid email address is required".to_string()).into());
    }
    if payload.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(TaskError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        ))
        .into());
    }

    let password_hash = auth::hash_password(&payload.password).map_err(TaskError::Database)?;

    // The store enforces identity uniqueness; translate its violation into
    // a user-facing conflict instead of a generic failure
    let db_user = match taskdeck_db::repositories::user::create_user(
        &state.db_pool,
        &email,
        &password_hash,
    )
    .await
    {
        Ok(user) => user,
        Err(err) if taskdeck_db::is_unique_violation(&err) => {
            return Err(TaskError::Conflict(
                "An account with this email already exists".to_string(),
            )
            .into());
        }
        Err(err) => return Err(TaskError::Database(err).into()),
    };

    let token = state
        .tokens
        .issue(db_user.id, &db_user.email)
        .map_err(TaskError::Database)?;

    Ok(Json(Envelope::new(AuthData {
        user: db_user.into(),
        token,
    })))
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<Envelope<AuthData>>, AppError> {
    let Json(payload) = payload
        .map_err(|_| TaskError::Validation("Email and password are required".to_string()))?;

    if payload.email.trim().is_empty() || payload.password.is_empty() {
        return Err(TaskError::Validation("Email and password are required".to_string()).into());
    }

    let email = normalize_email(&payload.email);
    let db_user =
        taskdeck_db::repositories::user::get_user_by_email(&state.db_pool, &email)
            .await
            .map_err(TaskError::Database)?;

    // Unknown email and wrong password are indistinguishable on the wire
    let db_user = match db_user {
        Some(user) if auth::verify_password(&payload.password, &user.password_hash) => user,
        _ => return Err(TaskError::Authentication(BAD_CREDENTIALS.to_string()).into()),
    };

    let token = state
        .tokens
        .issue(db_user.id, &db_user.email)
        .map_err(TaskError::Database)?;

    Ok(Json(Envelope::new(AuthData {
        user: db_user.into(),
        token,
    })))
}

#[axum::debug_handler]
pub async fn me(
    State(state): State<Arc<ApiState>>,
    caller: AuthUser,
) -> Result<Json<Envelope<UserData>>, AppError> {
    // The token outlives nothing: an account deleted since issuance is gone
    let db_user = taskdeck_db::repositories::user::get_user_by_id(&state.db_pool, caller.id)
        .await
        .map_err(TaskError::Database)?
        .ok_or_else(|| TaskError::NotFound("Account not found".to_string()))?;

    Ok(Json(Envelope::new(UserData {
        user: db_user.into(),
    })))
}
