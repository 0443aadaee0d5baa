//! Listing entity and repository trait.
//!
//! Maps to the `listings` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A property offered for rent.
///
/// Maps to the `listings` table:
/// - id: BIGINT PRIMARY KEY (Snowflake ID)
/// - title: VARCHAR(80) NOT NULL UNIQUE
/// - description: VARCHAR(2000) NOT NULL
/// - price: BIGINT NOT NULL CHECK (price BETWEEN 10 AND 10000)
/// - last_modified_date: DATE NOT NULL
/// - owner_id: BIGINT NOT NULL REFERENCES users(id)
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Price charged per booking; never decreases
    pub price: i64,
    /// Set at creation, refreshed on every successful update
    pub last_modified_date: NaiveDate,
    /// Owning user; immutable
    pub owner_id: i64,
    /// Immutable
    pub created_at: DateTime<Utc>,
}

impl Listing {
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.owner_id == user_id
    }

    /// Prices may stay the same or go up, never down.
    pub fn accepts_price(&self, new_price: i64) -> bool {
        new_price >= self.price
    }
}

/// Repository trait for Listing data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListingRepository: Send + Sync {
    async fn find_by_title(&self, title: &str) -> Result<Option<Listing>, AppError>;

    async fn title_exists(&self, title: &str) -> Result<bool, AppError>;

    /// All listings of one owner, oldest first.
    async fn find_by_owner(&self, owner_id: i64) -> Result<Vec<Listing>, AppError>;

    /// Every listing, oldest first.
    async fn list_all(&self) -> Result<Vec<Listing>, AppError>;

    async fn create(&self, listing: &Listing) -> Result<Listing, AppError>;

    /// Persist title, description, price and last_modified_date.
    /// Owner and creation time are never written.
    async fn update(&self, listing: &Listing) -> Result<Listing, AppError>;
}
