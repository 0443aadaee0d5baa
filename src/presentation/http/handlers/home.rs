//! Home Page Handler

use axum::{extract::State, response::Html, Extension};

use crate::domain::User;
use crate::presentation::http::views;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Dashboard for the signed-in user (see `session_guard`)
pub async fn home(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<Html<String>, AppError> {
    let own_listings = state
        .listings
        .listings_for_owner(user.id)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let bookings = state
        .bookings
        .bookings_for_user(user.id)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let all_listings = state
        .listings
        .list_listings()
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Html(views::home_page(
        &user,
        &own_listings,
        &bookings,
        &all_listings,
    )))
}
