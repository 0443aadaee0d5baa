//! Presentation Layer
//!
//! HTML form routes, views and request middleware.

pub mod http;
pub mod middleware;
