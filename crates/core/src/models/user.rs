use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimum accepted password length at registration.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Account as exposed to clients. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `{ data: { user, token } }` returned by register and login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthData {
    pub user: User,
    pub token: String,
}

/// Body of `{ data: { user } }` returned by the identity endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserData {
    pub user: User,
}

/// Normalizes an identity for lookup and storage: trimmed and case-folded.
///
/// All email comparisons in the system go through this, so `A@x.com` and
/// `a@x.com ` name the same account.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Shape check for an already-normalized email: one `@` with a non-empty
/// local part and a dotted, non-empty domain.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match domain.split_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty() && !domain.ends_with('.'),
        None => false,
    }
}
