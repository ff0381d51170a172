//! Unified application error handling.
//!
//! [`AppError`] is what every use case returns. Domain errors convert into it
//! one-to-one, so repository and entity failures reach the caller unchanged.
//! Adapters map [`AppError::code`] onto their own transport.

use domain::{DomainError, FieldErrors};
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    // Input
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("{0}")]
    BadRequest(String),

    // Resources
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    // Credentials
    #[error("{0}")]
    InvalidCredentials(String),

    #[error("{0}")]
    InvalidPassword(String),

    // Internal
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            AppError::InvalidCredentials(_) => "INVALID_CREDENTIALS",
            AppError::InvalidPassword(_) => "INVALID_PASSWORD",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }

    /// Per-field violations, for validation failures only
    pub fn fields(&self) -> Option<&FieldErrors> {
        match self {
            AppError::Validation(fields) => Some(fields),
            _ => None,
        }
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(fields) => AppError::Validation(fields),
            DomainError::NotFound(msg) => AppError::NotFound(msg),
            DomainError::Conflict(msg) => AppError::Conflict(msg),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        AppError::Conflict(msg.into())
    }

    pub fn invalid_credentials() -> Self {
        AppError::InvalidCredentials("Invalid credentials".to_string())
    }

    pub fn invalid_password() -> Self {
        AppError::InvalidPassword("Password is invalid".to_string())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
