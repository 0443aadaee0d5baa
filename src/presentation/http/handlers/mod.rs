//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints. Expected business failures are
//! rendered back onto the form that produced them; only infrastructure
//! failures surface as [`AppError`](crate::shared::error::AppError).

pub mod auth;
pub mod booking;
pub mod health;
pub mod home;
pub mod listing;
pub mod profile;

use std::fmt::Display;

/// Generic failure text followed by the rule that failed.
pub(crate) fn failure_message(generic: &str, reason: impl Display) -> String {
    format!("{}: {}", generic.trim_end_matches('.'), reason)
}
