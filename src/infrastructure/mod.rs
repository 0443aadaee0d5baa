//! Infrastructure Layer
//!
//! Contains implementations for external services including:
//! - PostgreSQL connection pool, migrations and transactions
//! - Database repositories
//! - Prometheus metrics

pub mod database;
pub mod metrics;
pub mod repositories;
