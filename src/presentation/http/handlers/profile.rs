//! Profile Handlers

use axum::{extract::State, response::Html, Form};

use super::failure_message;
use crate::application::dto::UpdateProfileForm;
use crate::application::services::AccountError;
use crate::infrastructure::metrics;
use crate::presentation::http::views;
use crate::shared::error::AppError;
use crate::startup::AppState;

pub async fn update_profile_form() -> Html<String> {
    Html(views::update_profile_page("Update Profile"))
}

/// Update username, email, billing address and postal code
pub async fn update_profile(
    State(state): State<AppState>,
    Form(form): Form<UpdateProfileForm>,
) -> Result<Html<String>, AppError> {
    let message = match state.accounts.update_user(form.into()).await {
        Ok(_) => {
            metrics::record_operation("update_profile", "success");
            "User Profile has been updated.".to_string()
        }
        Err(AccountError::Internal(msg)) => {
            metrics::record_operation("update_profile", "error");
            return Err(AppError::Internal(msg));
        }
        Err(e) => {
            metrics::record_operation("update_profile", e.outcome());
            failure_message("User Profile update has failed.", &e)
        }
    };

    Ok(Html(views::update_profile_page(&message)))
}
