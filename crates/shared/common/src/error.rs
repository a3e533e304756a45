//! Unified error handling for the console and HTTP front ends.
//!
//! Provides a single error type that can be:
//! - Printed as one line on the console
//! - Converted to an Axum HTTP response

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::{DomainError, FORMAT_ERROR_MESSAGE, OVERFLOW_ERROR_MESSAGE};
use serde::Serialize;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Amount input
    #[error("{0}")]
    InvalidFormat(String),

    #[error("{0}")]
    Overflow(String),

    #[error("{0}")]
    OutOfRange(String),

    #[error("{0}")]
    Granularity(String),

    // Request validation
    #[error("{0}")]
    Validation(String),

    // Console I/O
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        Self {
            error: ErrorBody {
                code: err.code().to_string(),
                message: err.user_message(),
            },
        }
    }
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidFormat(_) => "FORMAT_ERROR",
            AppError::Overflow(_) => "OVERFLOW_ERROR",
            AppError::OutOfRange(_) => "RANGE_ERROR",
            AppError::Granularity(_) => "GRANULARITY_ERROR",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidFormat(_)
            | AppError::Overflow(_)
            | AppError::OutOfRange(_)
            | AppError::Granularity(_)
            | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Io(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// True when the error was caused by what the user typed.
    ///
    /// Such errors are a normal outcome: the message is shown and the
    /// program carries on.
    pub fn is_input_error(&self) -> bool {
        self.status() == StatusCode::BAD_REQUEST
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Fixed wording for malformed numbers
            AppError::InvalidFormat(_) => FORMAT_ERROR_MESSAGE.to_string(),
            AppError::Overflow(_) => OVERFLOW_ERROR_MESSAGE.to_string(),

            // Bound violations describe themselves
            AppError::OutOfRange(msg) => msg.clone(),
            AppError::Granularity(msg) => msg.clone(),
            AppError::Validation(msg) => msg.clone(),

            // Hide details for internal errors
            AppError::Io(e) => {
                tracing::error!("I/O error: {:?}", e);
                "An input/output error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
        }
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse::from(&self);

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Format(msg) => AppError::InvalidFormat(msg),
            DomainError::Overflow(msg) => AppError::Overflow(msg),
            DomainError::Range(msg) => AppError::OutOfRange(msg),
            DomainError::Granularity(msg) => AppError::Granularity(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
