//! Domain error types for the report board server.
//!
//! Uses thiserror for ergonomic error handling with automatic Display implementations.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use utoipa::ToSchema;

/// Generic message for faults that never reach a handler's own error mapping.
pub const UNHANDLED_MESSAGE: &str = "Something went wrong on the server";

/// Application-level errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or out-of-range input
    #[error("{0}")]
    Validation(String),

    /// Unknown identifier; carries the record kind ("Report", "Upload")
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Persistence failure while mutating a record
    #[error("{message}: {details}")]
    Store {
        message: &'static str,
        details: String,
    },

    /// Persistence failure while listing a collection
    #[error("{message}: {details}")]
    Listing {
        message: &'static str,
        details: String,
    },

    /// Any other fault; the detail is logged and never returned
    #[error("Unhandled error: {0}")]
    Unhandled(String),
}

impl AppError {
    pub fn store(message: &'static str, err: impl std::fmt::Display) -> Self {
        AppError::Store {
            message,
            details: err.to_string(),
        }
    }

    pub fn listing(message: &'static str, err: impl std::fmt::Display) -> Self {
        AppError::Listing {
            message,
            details: err.to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Store { .. } | AppError::Listing { .. } | AppError::Unhandled(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        match self {
            AppError::Validation(_) | AppError::NotFound(_) => {
                HttpResponse::build(status).json(ErrorResponse::new(self.to_string()))
            }
            AppError::Store { message, details } => {
                tracing::error!("{}: {}", message, details);
                HttpResponse::build(status).json(ErrorResponse {
                    error: message.to_string(),
                    details: Some(details.clone()),
                })
            }
            AppError::Listing { message, details } => {
                tracing::error!("{}: {}", message, details);
                HttpResponse::build(status).json(ListErrorResponse {
                    success: false,
                    message: message.to_string(),
                    error: details.clone(),
                })
            }
            AppError::Unhandled(details) => {
                tracing::error!("Unhandled error: {}", details);
                HttpResponse::build(status).json(ErrorResponse::new(UNHANDLED_MESSAGE))
            }
        }
    }
}

/// Error body for mutations and unhandled faults.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    /// Underlying diagnostic, attached to store failures only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }
}

/// Error body for listing endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListErrorResponse {
    pub success: bool,
    pub message: String,
    pub error: String,
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
