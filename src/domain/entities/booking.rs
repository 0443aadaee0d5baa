//! Booking entity and repository trait.
//!
//! Maps to the `bookings` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::DateRange;
use crate::shared::error::AppError;

/// A user's reservation of a listing.
///
/// Maps to the `bookings` table:
/// - id: BIGINT PRIMARY KEY (Snowflake ID)
/// - user_id: BIGINT NOT NULL REFERENCES users(id)
/// - listing_id: BIGINT NOT NULL REFERENCES listings(id)
/// - start_date: DATE NOT NULL
/// - end_date: DATE NOT NULL CHECK (end_date >= start_date)
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    /// The booker
    pub user_id: i64,
    pub listing_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(id: i64, user_id: i64, listing_id: i64, dates: DateRange) -> Self {
        Self {
            id,
            user_id,
            listing_id,
            start_date: dates.start(),
            end_date: dates.end(),
            created_at: Utc::now(),
        }
    }

    /// The booked stay; `None` only for a corrupt row with reversed dates.
    pub fn dates(&self) -> Option<DateRange> {
        DateRange::new(self.start_date, self.end_date)
    }

    /// Whether this booking's inclusive range intersects `dates`.
    pub fn overlaps(&self, dates: &DateRange) -> bool {
        self.dates().is_some_and(|own| own.overlaps(dates))
    }
}

/// Repository trait for Booking data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// All bookings of a listing.
    async fn find_by_listing(&self, listing_id: i64) -> Result<Vec<Booking>, AppError>;

    /// All bookings made by a user, earliest stay first.
    async fn find_by_user(&self, user_id: i64) -> Result<Vec<Booking>, AppError>;

    /// Insert the booking and move `amount` from the booker to `owner_id`
    /// in one transaction.
    ///
    /// The debit only applies while the booker's balance covers `amount`;
    /// otherwise nothing is written and `AppError::Conflict` is returned.
    async fn create_with_transfer(
        &self,
        booking: &Booking,
        owner_id: i64,
        amount: i64,
    ) -> Result<Booking, AppError>;
}
