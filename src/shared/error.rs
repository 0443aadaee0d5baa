//! Application Error Types
//!
//! Centralized error handling. Business-rule failures never reach this
//! type; they are rendered back onto the form that produced them.
//! `AppError` covers repository outcomes (missing rows, unique violations)
//! and infrastructure failures. Its HTML response lives in the
//! presentation layer.

use axum::http::StatusCode;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) | AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the client.
    pub fn public_message(&self) -> String {
        match self {
            AppError::NotFound(msg) | AppError::Conflict(msg) => msg.clone(),
            AppError::Internal(_) | AppError::Database(_) => "Internal server error".into(),
        }
    }
}
