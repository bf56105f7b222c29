use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

pub const DUE_DATE_REQUIRED: &str = "due date is required";
pub const DUE_DATE_NOT_IN_FUTURE: &str = "due date must be in the future";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("Task not found with id: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),
}

pub type TaskResult<T> = Result<T, TaskError>;

/// Convert TaskError to AppError for standardized error responses
impl From<TaskError> for AppError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::NotFound(_) => AppError::NotFound(err.to_string()),
            TaskError::Validation(msg) => AppError::BadRequest(msg),
        }
    }
}

impl IntoResponse for TaskError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
