use thiserror::Error;

/// Domain error for the TaskDeck service.
///
/// Every handler failure path maps into exactly one of these variants; the
/// API crate translates each variant to an HTTP status. The message carried
/// by the caller-fault variants is the externally visible one, so it must
/// never contain internal detail.
#[derive(Error, Debug)]
pub enum TaskError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Authentication(String),

    #[error("{0}")]
    Authorization(String),

    #[error("{0}")]
    Conflict(String),

    #[error("database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("internal error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type TaskResult<T> = Result<T, TaskError>;
