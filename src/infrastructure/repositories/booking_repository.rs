//! Booking Repository Implementation
//!
//! PostgreSQL implementation of the BookingRepository trait. Creating a
//! booking also pays for it: the booker is debited and the owner credited
//! in the same transaction as the insert.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;

use crate::domain::{Booking, BookingRepository};
use crate::infrastructure::database::with_transaction;
use crate::shared::error::AppError;

const BOOKING_COLUMNS: &str = "id, user_id, listing_id, start_date, end_date, created_at";

#[derive(Debug, sqlx::FromRow)]
struct BookingRow {
    id: i64,
    user_id: i64,
    listing_id: i64,
    start_date: NaiveDate,
    end_date: NaiveDate,
    created_at: DateTime<Utc>,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Booking {
            id: row.id,
            user_id: row.user_id,
            listing_id: row.listing_id,
            start_date: row.start_date,
            end_date: row.end_date,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL booking repository implementation.
#[derive(Clone)]
pub struct PgBookingRepository {
    pool: PgPool,
}

impl PgBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PgBookingRepository {
    async fn find_by_listing(&self, listing_id: i64) -> Result<Vec<Booking>, AppError> {
        let rows = sqlx::query_as::<_, BookingRow>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE listing_id = $1 ORDER BY start_date"
        ))
        .bind(listing_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Booking::from).collect())
    }

    async fn find_by_user(&self, user_id: i64) -> Result<Vec<Booking>, AppError> {
        let rows = sqlx::query_as::<_, BookingRow>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE user_id = $1 ORDER BY start_date, id"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Booking::from).collect())
    }

    async fn create_with_transfer(
        &self,
        booking: &Booking,
        owner_id: i64,
        amount: i64,
    ) -> Result<Booking, AppError> {
        let booking = booking.clone();

        with_transaction(&self.pool, move |tx| {
            Box::pin(async move {
                let debited = sqlx::query(
                    "UPDATE users SET balance = balance - $2, updated_at = NOW() \
                     WHERE id = $1 AND balance >= $2",
                )
                .bind(booking.user_id)
                .bind(amount)
                .execute(&mut **tx)
                .await?;

                if debited.rows_affected() == 0 {
                    return Err(AppError::Conflict(format!(
                        "Balance of user {} does not cover {}",
                        booking.user_id, amount
                    )));
                }

                let credited = sqlx::query(
                    "UPDATE users SET balance = balance + $2, updated_at = NOW() WHERE id = $1",
                )
                .bind(owner_id)
                .bind(amount)
                .execute(&mut **tx)
                .await?;

                if credited.rows_affected() == 0 {
                    return Err(AppError::NotFound(format!(
                        "Owner with id {} not found",
                        owner_id
                    )));
                }

                let row = sqlx::query_as::<_, BookingRow>(&format!(
                    r#"
                    INSERT INTO bookings (id, user_id, listing_id, start_date, end_date, created_at)
                    VALUES ($1, $2, $3, $4, $5, $6)
                    RETURNING {BOOKING_COLUMNS}
                    "#
                ))
                .bind(booking.id)
                .bind(booking.user_id)
                .bind(booking.listing_id)
                .bind(booking.start_date)
                .bind(booking.end_date)
                .bind(booking.created_at)
                .fetch_one(&mut **tx)
                .await?;

                Ok(Booking::from(row))
            })
        })
        .await
    }
}
