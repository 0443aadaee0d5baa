//! Listing Handlers

use axum::{extract::State, response::Html, Form};

use super::failure_message;
use crate::application::dto::{CreateListingForm, UpdateListingForm};
use crate::application::services::ListingError;
use crate::infrastructure::metrics;
use crate::presentation::http::views;
use crate::shared::error::AppError;
use crate::startup::AppState;

const PRICE_NOT_INTEGER: &str = "Please enter an integer for price.";

pub async fn create_listing_form() -> Html<String> {
    Html(views::create_listing_page("Create Listing"))
}

/// Create a listing
pub async fn create_listing(
    State(state): State<AppState>,
    Form(form): Form<CreateListingForm>,
) -> Result<Html<String>, AppError> {
    let Some(request) = form.into_dto() else {
        metrics::record_operation("create_listing", "price_not_integer");
        return Ok(Html(views::create_listing_page(PRICE_NOT_INTEGER)));
    };

    let message = match state.listings.create_listing(request).await {
        Ok(_) => {
            metrics::record_operation("create_listing", "success");
            "Listing Created.".to_string()
        }
        Err(ListingError::Internal(msg)) => {
            metrics::record_operation("create_listing", "error");
            return Err(AppError::Internal(msg));
        }
        Err(e) => {
            metrics::record_operation("create_listing", e.outcome());
            failure_message("Listing Creation Failed.", &e)
        }
    };

    Ok(Html(views::create_listing_page(&message)))
}

pub async fn update_listing_form() -> Html<String> {
    Html(views::update_listing_page("Update Listing"))
}

/// Update an owner's listing
pub async fn update_listing(
    State(state): State<AppState>,
    Form(form): Form<UpdateListingForm>,
) -> Result<Html<String>, AppError> {
    let Some(request) = form.into_dto() else {
        metrics::record_operation("update_listing", "price_not_integer");
        return Ok(Html(views::update_listing_page(PRICE_NOT_INTEGER)));
    };

    let message = match state.listings.update_listing(request).await {
        Ok(_) => {
            metrics::record_operation("update_listing", "success");
            "Listing Updated.".to_string()
        }
        Err(ListingError::Internal(msg)) => {
            metrics::record_operation("update_listing", "error");
            return Err(AppError::Internal(msg));
        }
        Err(e) => {
            metrics::record_operation("update_listing", e.outcome());
            failure_message("Listing Update Failed.", &e)
        }
    };

    Ok(Html(views::update_listing_page(&message)))
}
