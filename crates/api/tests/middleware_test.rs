use axum::http::StatusCode;
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use taskdeck_api::middleware::auth::{self, Claims, TokenAuth, TokenRejection};
use taskdeck_core::errors::TaskError;
use uuid::Uuid;

const SECRET: &[u8] = b"test-signing-secret";

fn expired_claims(user_id: Uuid) -> Claims {
    let now = Utc::now();
    Claims {
        sub: user_id.to_string(),
        email: "a@x.com".to_string(),
        iat: (now - Duration::days(8)).timestamp(),
        exp: (now - Duration::days(1)).timestamp(),
    }
}

#[test]
fn test_hash_password_is_salted() {
    let first = auth::hash_password("secret123").unwrap();
    let second = auth::hash_password("secret123").unwrap();

    // Fresh salt per call: same secret, different opaque hashes
    assert_ne!(first, second);
    assert!(auth::verify_password("secret123", &first));
    assert!(auth::verify_password("secret123", &second));
}

#[test]
fn test_verify_password_rejects_wrong_secret() {
    let hash = auth::hash_password("secret123").unwrap();
    assert!(!auth::verify_password("secret124", &hash));
}

#[test]
fn test_verify_password_treats_malformed_hash_as_no_match() {
    assert!(!auth::verify_password("secret123", "not-a-phc-string"));
    assert!(!auth::verify_password("secret123", ""));
}

#[test]
fn test_token_round_trip_preserves_identity() {
    let tokens = TokenAuth::new(SECRET);
    let user_id = Uuid::new_v4();

    let token = tokens.issue(user_id, "a@x.com").unwrap();
    let claims = tokens.verify(&token).unwrap();

    assert_eq!(claims.sub, user_id.to_string());
    assert_eq!(claims.email, "a@x.com");
    assert!(claims.exp > claims.iat);
}

#[test]
fn test_token_from_other_secret_is_malformed() {
    let tokens = TokenAuth::new(SECRET);
    let others = TokenAuth::new(b"some-other-secret");

    let token = others.issue(Uuid::new_v4(), "a@x.com").unwrap();
    assert!(matches!(
        tokens.verify(&token),
        Err(TokenRejection::Malformed)
    ));
}

#[test]
fn test_garbage_token_is_malformed() {
    let tokens = TokenAuth::new(SECRET);
    assert!(matches!(
        tokens.verify("not.a.token"),
        Err(TokenRejection::Malformed)
    ));
    assert!(matches!(tokens.verify(""), Err(TokenRejection::Malformed)));
}

#[test]
fn test_tampered_token_is_malformed() {
    let tokens = TokenAuth::new(SECRET);
    let token = tokens.issue(Uuid::new_v4(), "a@x.com").unwrap();

    // Flip a character inside the payload segment
    let mut tampered: Vec<String> = token.split('.').map(str::to_string).collect();
    let payload = tampered[1].clone();
    tampered[1] = if payload.starts_with('A') {
        format!("B{}", &payload[1..])
    } else {
        format!("A{}", &payload[1..])
    };
    let tampered = tampered.join(".");

    assert!(matches!(
        tokens.verify(&tampered),
        Err(TokenRejection::Malformed)
    ));
}

#[test]
fn test_stale_expiry_with_valid_signature_is_expired() {
    let tokens = TokenAuth::new(SECRET);
    let claims = expired_claims(Uuid::new_v4());

    // Correctly signed, but the clock has passed exp
    let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(SECRET)).unwrap();
    assert!(matches!(tokens.verify(&token), Err(TokenRejection::Expired)));
}

#[tokio::test]
async fn test_error_handling_not_found() {
    let error = TaskError::NotFound("To-do not found".to_string());
    let response = taskdeck_api::middleware::error_handling::map_error(error);
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_error_handling_validation() {
    let error = TaskError::Validation("To-do text must not be empty".to_string());
    let response = taskdeck_api::middleware::error_handling::map_error(error);
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_authentication() {
    let error = TaskError::Authentication("Authentication required".to_string());
    let response = taskdeck_api::middleware::error_handling::map_error(error);
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_error_handling_authorization() {
    let error = TaskError::Authorization("Invalid authentication token".to_string());
    let response = taskdeck_api::middleware::error_handling::map_error(error);
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_error_handling_conflict() {
    let error = TaskError::Conflict("An account with this email already exists".to_string());
    let response = taskdeck_api::middleware::error_handling::map_error(error);
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_error_handling_database_masks_detail() {
    use http_body_util::BodyExt;

    let error = TaskError::Database(eyre::eyre!("password authentication failed for user"));
    let response = taskdeck_api::middleware::error_handling::map_error(error);
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // The store's failure text must not leak into the envelope
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, serde_json::json!({ "error": "Internal server error" }));
}
