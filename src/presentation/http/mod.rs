//! HTTP surface: routes, handlers and page rendering.

mod error_response;
pub mod handlers;
pub mod routes;
pub mod views;
