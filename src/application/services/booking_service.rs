//! Booking Service
//!
//! Checks every booking precondition, then hands the payment and insert to
//! the repository as a single transaction.

use std::borrow::Cow;
use std::sync::Arc;

use async_trait::async_trait;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::rules;
use crate::domain::{Booking, BookingRepository, DateRange, ListingRepository, UserRepository};
use crate::infrastructure::metrics;
use crate::shared::error::AppError;
use crate::shared::snowflake::SnowflakeGenerator;
use crate::shared::validation::{describe, validate_date};

/// Booking service trait for dependency injection
#[async_trait]
pub trait BookingService: Send + Sync {
    async fn create_booking(&self, request: CreateBookingDto) -> Result<Booking, BookingError>;

    async fn bookings_for_user(&self, user_id: i64) -> Result<Vec<Booking>, BookingError>;
}

/// Booking request; dates are `YYYY-MM-DD`
#[derive(Debug, Clone, Validate)]
#[validate(schema(function = "dates_in_order"))]
pub struct CreateBookingDto {
    pub user_email: String,
    pub listing_title: String,

    #[validate(custom(function = "validate_date"))]
    pub start_date: String,

    #[validate(custom(function = "validate_date"))]
    pub end_date: String,
}

impl CreateBookingDto {
    /// The requested stay, if both dates parse and are in order.
    fn dates(&self) -> Option<DateRange> {
        let start = rules::parse_date(&self.start_date)?;
        let end = rules::parse_date(&self.end_date)?;
        DateRange::new(start, end)
    }
}

/// Runs only once both dates have parsed.
fn dates_in_order(request: &CreateBookingDto) -> Result<(), ValidationError> {
    match request.dates() {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("date_order")
            .with_message(Cow::Borrowed("End date cannot be before the start date"))),
    }
}

/// Booking service errors
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("{}", describe(.0))]
    Validation(ValidationErrors),

    #[error("User not found")]
    UserNotFound,

    #[error("Listing not found")]
    ListingNotFound,

    #[error("You cannot book your own listing")]
    SelfBooking,

    #[error("Balance of {balance} does not cover the price of {price}")]
    InsufficientBalance { balance: i64, price: i64 },

    #[error("The listing is already booked for {0}")]
    DatesUnavailable(DateRange),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl BookingError {
    /// Short label for metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            Self::Validation(_) => "invalid",
            Self::UserNotFound => "user_not_found",
            Self::ListingNotFound => "listing_not_found",
            Self::SelfBooking => "self_booking",
            Self::InsufficientBalance { .. } => "insufficient_balance",
            Self::DatesUnavailable(_) => "dates_unavailable",
            Self::Internal(_) => "error",
        }
    }
}

impl From<AppError> for BookingError {
    fn from(e: AppError) -> Self {
        Self::Internal(e.to_string())
    }
}

/// BookingService implementation
pub struct BookingServiceImpl<U, L, B>
where
    U: UserRepository,
    L: ListingRepository,
    B: BookingRepository,
{
    user_repo: Arc<U>,
    listing_repo: Arc<L>,
    booking_repo: Arc<B>,
    id_generator: Arc<SnowflakeGenerator>,
}

impl<U, L, B> BookingServiceImpl<U, L, B>
where
    U: UserRepository,
    L: ListingRepository,
    B: BookingRepository,
{
    pub fn new(
        user_repo: Arc<U>,
        listing_repo: Arc<L>,
        booking_repo: Arc<B>,
        id_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            user_repo,
            listing_repo,
            booking_repo,
            id_generator,
        }
    }
}

#[async_trait]
impl<U, L, B> BookingService for BookingServiceImpl<U, L, B>
where
    U: UserRepository + 'static,
    L: ListingRepository + 'static,
    B: BookingRepository + 'static,
{
    async fn create_booking(&self, request: CreateBookingDto) -> Result<Booking, BookingError> {
        request.validate().map_err(BookingError::Validation)?;
        let dates = request
            .dates()
            .ok_or_else(|| BookingError::Internal("validated dates failed to parse".into()))?;

        let user = self
            .user_repo
            .find_by_email(&request.user_email)
            .await?
            .ok_or(BookingError::UserNotFound)?;

        let listing = self
            .listing_repo
            .find_by_title(&request.listing_title)
            .await?
            .ok_or(BookingError::ListingNotFound)?;

        if listing.is_owned_by(user.id) {
            tracing::info!(
                user_id = user.id,
                listing_id = listing.id,
                "Booking rejected: own listing"
            );
            return Err(BookingError::SelfBooking);
        }

        if !user.can_afford(listing.price) {
            tracing::info!(
                user_id = user.id,
                balance = user.balance,
                price = listing.price,
                "Booking rejected: insufficient balance"
            );
            return Err(BookingError::InsufficientBalance {
                balance: user.balance,
                price: listing.price,
            });
        }

        let existing = self.booking_repo.find_by_listing(listing.id).await?;
        if let Some(clash) = existing.iter().find(|b| b.overlaps(&dates)) {
            tracing::info!(
                listing_id = listing.id,
                booking_id = clash.id,
                "Booking rejected: dates overlap"
            );
            return Err(BookingError::DatesUnavailable(clash.dates().unwrap_or(dates)));
        }

        let booking = Booking::new(self.id_generator.generate(), user.id, listing.id, dates);
        let created = self
            .booking_repo
            .create_with_transfer(&booking, listing.owner_id, listing.price)
            .await
            .map_err(|e| match e {
                // the balance changed between the check above and the debit
                AppError::Conflict(_) => BookingError::InsufficientBalance {
                    balance: user.balance,
                    price: listing.price,
                },
                e => e.into(),
            })?;

        metrics::record_booking_transfer(listing.price);
        tracing::info!(
            booking_id = created.id,
            user_id = user.id,
            owner_id = listing.owner_id,
            amount = listing.price,
            "Booking created"
        );

        Ok(created)
    }

    async fn bookings_for_user(&self, user_id: i64) -> Result<Vec<Booking>, BookingError> {
        Ok(self.booking_repo.find_by_user(user_id).await?)
    }
}
