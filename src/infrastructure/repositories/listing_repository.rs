//! Listing Repository Implementation
//!
//! PostgreSQL implementation of the ListingRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;

use super::conflict_on_unique;
use crate::domain::{Listing, ListingRepository};
use crate::shared::error::AppError;

const LISTINGS_TITLE_KEY: &str = "listings_title_key";

const LISTING_COLUMNS: &str =
    "id, title, description, price, last_modified_date, owner_id, created_at";

#[derive(Debug, sqlx::FromRow)]
struct ListingRow {
    id: i64,
    title: String,
    description: String,
    price: i64,
    last_modified_date: NaiveDate,
    owner_id: i64,
    created_at: DateTime<Utc>,
}

impl From<ListingRow> for Listing {
    fn from(row: ListingRow) -> Self {
        Listing {
            id: row.id,
            title: row.title,
            description: row.description,
            price: row.price,
            last_modified_date: row.last_modified_date,
            owner_id: row.owner_id,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL listing repository implementation.
#[derive(Clone)]
pub struct PgListingRepository {
    pool: PgPool,
}

impl PgListingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ListingRepository for PgListingRepository {
    async fn find_by_title(&self, title: &str) -> Result<Option<Listing>, AppError> {
        let row = sqlx::query_as::<_, ListingRow>(&format!(
            "SELECT {LISTING_COLUMNS} FROM listings WHERE title = $1"
        ))
        .bind(title)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Listing::from))
    }

    async fn title_exists(&self, title: &str) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM listings WHERE title = $1)",
        )
        .bind(title)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn find_by_owner(&self, owner_id: i64) -> Result<Vec<Listing>, AppError> {
        let rows = sqlx::query_as::<_, ListingRow>(&format!(
            "SELECT {LISTING_COLUMNS} FROM listings WHERE owner_id = $1 ORDER BY created_at, id"
        ))
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Listing::from).collect())
    }

    async fn list_all(&self) -> Result<Vec<Listing>, AppError> {
        let rows = sqlx::query_as::<_, ListingRow>(&format!(
            "SELECT {LISTING_COLUMNS} FROM listings ORDER BY created_at, id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Listing::from).collect())
    }

    async fn create(&self, listing: &Listing) -> Result<Listing, AppError> {
        let row = sqlx::query_as::<_, ListingRow>(&format!(
            r#"
            INSERT INTO listings (id, title, description, price, last_modified_date, owner_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {LISTING_COLUMNS}
            "#
        ))
        .bind(listing.id)
        .bind(&listing.title)
        .bind(&listing.description)
        .bind(listing.price)
        .bind(listing.last_modified_date)
        .bind(listing.owner_id)
        .bind(listing.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            conflict_on_unique(e, LISTINGS_TITLE_KEY, "A listing with this title already exists")
        })?;

        Ok(row.into())
    }

    async fn update(&self, listing: &Listing) -> Result<Listing, AppError> {
        let row = sqlx::query_as::<_, ListingRow>(&format!(
            r#"
            UPDATE listings
            SET title = $2,
                description = $3,
                price = $4,
                last_modified_date = $5
            WHERE id = $1
            RETURNING {LISTING_COLUMNS}
            "#
        ))
        .bind(listing.id)
        .bind(&listing.title)
        .bind(&listing.description)
        .bind(listing.price)
        .bind(listing.last_modified_date)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            conflict_on_unique(e, LISTINGS_TITLE_KEY, "A listing with this title already exists")
        })?
        .ok_or_else(|| AppError::NotFound(format!("Listing with id {} not found", listing.id)))?;

        Ok(row.into())
    }
}
