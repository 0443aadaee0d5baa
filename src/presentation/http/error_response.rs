//! HTML rendering of [`AppError`].

use axum::response::{Html, IntoResponse, Response};

use super::views;
use crate::shared::error::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Internal(msg) => tracing::error!("Internal error: {}", msg),
            AppError::Database(e) => tracing::error!("Database error: {}", e),
            other => tracing::debug!(error = %other, "Request rejected"),
        }

        let status = self.status_code();
        let body = views::error_page(status.as_u16(), &self.public_message());

        (status, Html(body)).into_response()
    }
}
