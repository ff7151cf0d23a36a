use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Duplicate entry")]
    Duplicate,

    #[error("Request body too large")]
    PayloadTooLarge,

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    DatabaseError,
    InvalidInput,
    Duplicate,
    PayloadTooLarge,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::Duplicate => "DUPLICATE",
            ErrorCode::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Database(_) => ErrorCode::DatabaseError,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Duplicate => ErrorCode::Duplicate,
            AppError::PayloadTooLarge => ErrorCode::PayloadTooLarge,
            AppError::Internal(_) => ErrorCode::InternalError,
        }
    }

    /// True when the caller caused the failure and the detail is safe to show.
    pub fn is_client_fault(&self) -> bool {
        matches!(
            self,
            AppError::InvalidInput(_) | AppError::Duplicate | AppError::PayloadTooLarge
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
