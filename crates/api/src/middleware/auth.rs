//! # Authentication Module
//!
//! This module provides the authentication primitives for the TaskDeck API:
//! password hashing and verification, session token issuance and
//! verification, and the access-gate extractor that binds a caller identity
//! to each request.
//!
//! Passwords are hashed with Argon2, which salts every hash so two hashes
//! of the same password differ. Session tokens are HS256-signed JWTs keyed
//! with a process-wide secret; verification is purely cryptographic and
//! never consults the database.

use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, SaltString},
    Argon2, PasswordHasher, PasswordVerifier,
};
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use chrono::{Duration, Utc};
use eyre::Result;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use taskdeck_core::errors::TaskError;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

/// Session token lifetime: a fixed window from issuance. Expiry is the only
/// way a token dies; there is no server-side revocation.
const TOKEN_TTL_DAYS: i64 = 7;

/// Hashes a password using the Argon2 algorithm.
///
/// Generates a fresh random salt per call and returns the hash in PHC
/// string format (algorithm, version, parameters, salt, and hash).
pub fn hash_password(password: &str) -> Result<String> {
    // Generate a fresh, random salt
    let salt = SaltString::generate(&mut OsRng);

    // Create default Argon2 instance
    let argon2 = Argon2::default();

    // Hash the password with salt
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| eyre::eyre!("Error hashing password: {}", e))?
        .to_string();

    Ok(password_hash)
}

/// Verifies a password against a stored hash.
///
/// Re-derives with the salt embedded in the PHC string. A malformed stored
/// hash is a no-match, not an error, so callers get a single boolean and
/// nothing to turn into an oracle.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

/// Claims carried by a session token: the account id (`sub`), the
/// human-readable identity label, and the issuance/expiry timestamps the
/// signature covers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

/// Why a presented token was refused.
///
/// Structural invalidity and signature mismatch are deliberately collapsed
/// into `Malformed`; distinguishing them would hand an attacker an oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRejection {
    /// Signature valid, clock past expiry. The caller needs to log in again.
    Expired,
    /// Structurally invalid or signature mismatch.
    Malformed,
}

/// Session token issuer/verifier, keyed once at startup.
pub struct TokenAuth {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenAuth {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation: Validation::default(),
        }
    }

    /// Mints a signed token asserting `user_id`, expiring [`TOKEN_TTL_DAYS`]
    /// from now.
    pub fn issue(&self, user_id: Uuid, email: &str) -> Result<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| eyre::eyre!("Error signing session token: {}", e))
    }

    /// Checks signature and expiry, returning the embedded claims on
    /// success. No database access.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenRejection> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenRejection::Expired,
                _ => TokenRejection::Malformed,
            })
    }
}

/// The caller identity bound by the access gate.
///
/// Declaring an `AuthUser` argument on a handler routes the request through
/// the gate: no token yields 401, an expired token yields 401 with a
/// re-login message, and a malformed token yields 403, all before the
/// handler body runs.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: String,
}

#[axum::async_trait]
impl FromRequestParts<Arc<ApiState>> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<ApiState>,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or_else(|| {
            AppError(TaskError::Authentication(
                "Authentication required".to_string(),
            ))
        })?;

        let claims = state.tokens.verify(token).map_err(|rejection| {
            AppError(match rejection {
                TokenRejection::Expired => TaskError::Authentication(
                    "Session expired, please log in again".to_string(),
                ),
                TokenRejection::Malformed => {
                    TaskError::Authorization("Invalid authentication token".to_string())
                }
            })
        })?;

        // A sub that is not a UUID cannot have been minted by us
        let id = claims.sub.parse::<Uuid>().map_err(|_| {
            AppError(TaskError::Authorization(
                "Invalid authentication token".to_string(),
            ))
        })?;

        Ok(AuthUser {
            id,
            email: claims.email,
        })
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
