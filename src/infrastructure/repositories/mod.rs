//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits.
//!
//! ## Available Repositories
//!
//! - **PgUserRepository** - accounts, credentials and balances
//! - **PgListingRepository** - property listings
//! - **PgBookingRepository** - bookings and the balance transfer that pays for them
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use rental_marketplace::infrastructure::repositories::{
//!     PgBookingRepository, PgListingRepository, PgUserRepository,
//! };
//!
//! fn setup_repositories(pool: PgPool) {
//!     let users = PgUserRepository::new(pool.clone());
//!     let listings = PgListingRepository::new(pool.clone());
//!     let bookings = PgBookingRepository::new(pool);
//! }
//! ```

pub mod booking_repository;
pub mod listing_repository;
pub mod user_repository;

pub use booking_repository::PgBookingRepository;
pub use listing_repository::PgListingRepository;
pub use user_repository::PgUserRepository;

/// Map a violation of the named unique constraint to `AppError::Conflict`.
/// Any other failure, a primary-key clash included, stays `AppError::Database`.
pub(crate) fn conflict_on_unique(
    e: sqlx::Error,
    constraint: &str,
    message: &str,
) -> crate::shared::error::AppError {
    use crate::shared::error::AppError;

    match &e {
        sqlx::Error::Database(db_err)
            if db_err.is_unique_violation() && db_err.constraint() == Some(constraint) =>
        {
            AppError::Conflict(message.to_string())
        }
        _ => AppError::Database(e),
    }
}
