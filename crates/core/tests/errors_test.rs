use std::error::Error;
use taskdeck_core::errors::{TaskError, TaskResult};

#[test]
fn test_task_error_display() {
    let not_found = TaskError::NotFound("To-do not found".to_string());
    let validation = TaskError::Validation("To-do text must not be empty".to_string());
    let authentication = TaskError::Authentication("Invalid email or password".to_string());
    let authorization = TaskError::Authorization("Invalid authentication token".to_string());
    let conflict = TaskError::Conflict("An account with this email already exists".to_string());

    // Caller-fault variants surface their message verbatim; that message is
    // the externally visible one
    assert_eq!(not_found.to_string(), "To-do not found");
    assert_eq!(validation.to_string(), "To-do text must not be empty");
    assert_eq!(authentication.to_string(), "Invalid email or password");
    assert_eq!(authorization.to_string(), "Invalid authentication token");
    assert_eq!(
        conflict.to_string(),
        "An account with this email already exists"
    );
}

#[test]
fn test_infrastructure_error_display() {
    let database = TaskError::Database(eyre::eyre!("connection refused"));
    let internal = TaskError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "broken pipe",
    )));

    assert!(database.to_string().starts_with("database error:"));
    assert!(internal.to_string().starts_with("internal error:"));
}

#[test]
fn test_task_result() {
    let result: TaskResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: TaskResult<i32> = Err(TaskError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_from_eyre_report() {
    let report = eyre::eyre!("pool exhausted");
    let task_error = TaskError::from(report);

    assert!(matches!(task_error, TaskError::Database(_)));
}

#[test]
fn test_box_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let boxed_error: Box<dyn Error + Send + Sync> = Box::new(io_error);
    let task_error = TaskError::Internal(boxed_error);

    assert!(task_error.source().is_some());
    assert!(task_error.to_string().contains("IO error"));
}
