//! Data Transfer Objects
//!
//! Form bodies posted by the HTML pages and their conversion into service
//! commands.

pub mod request;

pub use request::*;
