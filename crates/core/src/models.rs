pub mod todo;
pub mod user;

use serde::{Deserialize, Serialize};

/// Uniform success envelope for the wire contract: `{ "data": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Bare-message response used by operations that return no record,
/// e.g. deletion: `{ "message": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
