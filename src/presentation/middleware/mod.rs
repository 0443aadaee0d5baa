//! Middleware
//!
//! Tower middleware for request processing.

pub mod logging;
pub mod metrics;
pub mod session;

pub use metrics::track_metrics;
pub use session::session_guard;
