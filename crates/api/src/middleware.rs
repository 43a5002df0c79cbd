/// Password hashing, session tokens, and the bearer-token access gate
pub mod auth;
/// Domain-error to HTTP-response mapping
pub mod error_handling;
