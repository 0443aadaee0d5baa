//! Authentication Handlers

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use super::failure_message;
use crate::application::dto::{LoginForm, RegisterForm};
use crate::application::services::{AccountError, RegisterUserDto};
use crate::infrastructure::metrics;
use crate::presentation::http::views;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Show the login form
pub async fn login_form() -> Html<String> {
    Html(views::login_page("Please login"))
}

/// Check credentials and start a session
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    match state.accounts.login(form.into()).await {
        Ok(user) => {
            let token = state
                .sessions
                .issue(&user.email)
                .map_err(|e| AppError::Internal(e.to_string()))?;

            let cookie = Cookie::build((state.sessions.cookie_name().to_owned(), token))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .secure(state.sessions.secure_cookie())
                .max_age(time::Duration::seconds(
                    state.sessions.lifetime().num_seconds(),
                ));

            metrics::record_operation("login", "success");
            tracing::info!(user_id = user.id, "User logged in");

            // 303 so the browser follows up with a GET
            Ok((jar.add(cookie), Redirect::to("/")).into_response())
        }
        Err(AccountError::Internal(msg)) => {
            metrics::record_operation("login", "error");
            Err(AppError::Internal(msg))
        }
        Err(e) => {
            metrics::record_operation("login", e.outcome());
            Ok(Html(views::login_page(&failure_message("login failed", &e))).into_response())
        }
    }
}

/// Show the registration form
pub async fn register_form() -> Html<String> {
    Html(views::register_page(""))
}

/// Register a new user, then send them to the login page
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Response, AppError> {
    if !form.passwords_match() {
        metrics::record_operation("register", "password_mismatch");
        return Ok(Html(views::register_page("The passwords do not match")).into_response());
    }

    let request = RegisterUserDto {
        username: form.name,
        email: form.email,
        password: form.password,
    };

    match state.accounts.register(request).await {
        Ok(_) => {
            metrics::record_operation("register", "success");
            Ok(Redirect::to("/login").into_response())
        }
        Err(AccountError::Internal(msg)) => {
            metrics::record_operation("register", "error");
            Err(AppError::Internal(msg))
        }
        Err(e) => {
            metrics::record_operation("register", e.outcome());
            Ok(Html(views::register_page(&failure_message("Registration failed.", &e)))
                .into_response())
        }
    }
}

/// End the session
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let cookie = Cookie::build(state.sessions.cookie_name().to_owned()).path("/");
    (jar.remove(cookie), Redirect::to("/"))
}
