//! Session Middleware
//!
//! Cookie-backed login check for protected pages.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::domain::User;
use crate::startup::AppState;

/// Resolve the session cookie to a [`User`] request extension, or redirect
/// to `/login`. Any failure along the way counts as "not logged in".
pub async fn session_guard(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    match current_user(&state, &jar).await {
        Some(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        None => Redirect::to("/login").into_response(),
    }
}

async fn current_user(state: &AppState, jar: &CookieJar) -> Option<User> {
    let token = jar.get(state.sessions.cookie_name())?;
    let email = state.sessions.resolve(token.value())?;

    match state.accounts.find_by_email(&email).await {
        Ok(Some(user)) => Some(user),
        Ok(None) => {
            tracing::debug!(email = %email, "Session refers to a missing user");
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, "Session lookup failed");
            None
        }
    }
}
