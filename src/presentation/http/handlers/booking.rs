//! Booking Handlers

use axum::{extract::State, response::Html, Form};

use super::failure_message;
use crate::application::dto::CreateBookingForm;
use crate::application::services::BookingError;
use crate::infrastructure::metrics;
use crate::presentation::http::views;
use crate::shared::error::AppError;
use crate::startup::AppState;

pub async fn create_booking_form() -> Html<String> {
    Html(views::create_booking_page("Create Booking"))
}

/// Book a listing and pay its owner
pub async fn create_booking(
    State(state): State<AppState>,
    Form(form): Form<CreateBookingForm>,
) -> Result<Html<String>, AppError> {
    let message = match state.bookings.create_booking(form.into()).await {
        Ok(_) => {
            metrics::record_operation("create_booking", "success");
            "Booking Created.".to_string()
        }
        Err(BookingError::Internal(msg)) => {
            metrics::record_operation("create_booking", "error");
            return Err(AppError::Internal(msg));
        }
        Err(e) => {
            metrics::record_operation("create_booking", e.outcome());
            failure_message("Booking Creation Failed.", &e)
        }
    };

    Ok(Html(views::create_booking_page(&message)))
}
