//! Error handling - RFC 7807 compliant responses.

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use textify_core::{DomainError, RepoError};
use textify_shared::ErrorResponse;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let problem = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Internal(detail) => {
                // Internal details go to the log, not to the client
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(problem)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::BadRequest(msg),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Connection(msg) => {
                tracing::error!("Store connection error: {}", msg);
                AppError::Internal("Storage error".to_string())
            }
            RepoError::Query(msg) => {
                tracing::error!("Store query error: {}", msg);
                AppError::Internal("Storage error".to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
