//! Route Configuration
//!
//! Configures all HTTP routes for the marketplace.

use axum::{middleware, response::IntoResponse, routing::get, Router};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::{session_guard, track_metrics};
use crate::startup::AppState;

/// Create the main router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(protected_routes(state.clone()))
        .merge(form_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .layer(middleware::from_fn(track_metrics))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}

/// Pages that need a logged-in user
fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::home::home))
        .route_layer(middleware::from_fn_with_state(state, session_guard))
}

/// Public form pages: GET renders the form, POST submits it
fn form_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/login",
            get(handlers::auth::login_form).post(handlers::auth::login),
        )
        .route(
            "/register",
            get(handlers::auth::register_form).post(handlers::auth::register),
        )
        .route("/logout", get(handlers::auth::logout))
        .route(
            "/create_listing",
            get(handlers::listing::create_listing_form).post(handlers::listing::create_listing),
        )
        .route(
            "/update_listing",
            get(handlers::listing::update_listing_form).post(handlers::listing::update_listing),
        )
        .route(
            "/update_profile",
            get(handlers::profile::update_profile_form).post(handlers::profile::update_profile),
        )
        .route(
            "/create_booking",
            get(handlers::booking::create_booking_form).post(handlers::booking::create_booking),
        )
}
