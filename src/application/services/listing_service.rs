//! Listing Service
//!
//! Handles listing creation, updates and the read helpers behind the home page.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::rules;
use crate::domain::{Listing, ListingRepository, UserRepository};
use crate::shared::error::AppError;
use crate::shared::snowflake::SnowflakeGenerator;
use crate::shared::validation::{
    describe, validate_description, validate_listing_date, validate_not_blank, validate_title,
};

/// Listing service trait for dependency injection
#[async_trait]
pub trait ListingService: Send + Sync {
    async fn create_listing(&self, request: CreateListingDto) -> Result<Listing, ListingError>;

    async fn update_listing(&self, request: UpdateListingDto) -> Result<Listing, ListingError>;

    async fn list_listings(&self) -> Result<Vec<Listing>, ListingError>;

    async fn listings_for_owner(&self, owner_id: i64) -> Result<Vec<Listing>, ListingError>;
}

/// Listing creation request
#[derive(Debug, Clone, Validate)]
#[validate(schema(function = "description_outweighs_title", skip_on_field_errors = false))]
pub struct CreateListingDto {
    #[validate(custom(function = "validate_title"))]
    pub title: String,

    pub description: String,

    #[validate(range(min = 10, max = 10000, message = "Price must be between 10 and 10000"))]
    pub price: i64,

    /// `YYYY-MM-DD`
    #[validate(custom(function = "validate_listing_date"))]
    pub last_modified_date: String,

    #[validate(custom(function = "validate_not_blank", message = "Owner email is required"))]
    pub owner_email: String,
}

fn description_outweighs_title(request: &CreateListingDto) -> Result<(), ValidationError> {
    validate_description(&request.description, &request.title)
}

/// Listing update request. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, Validate)]
pub struct UpdateListingDto {
    pub owner_email: String,

    /// Listing to update; the owner's earliest listing when absent
    pub listing_title: Option<String>,

    #[validate(custom(function = "validate_title"))]
    pub title: Option<String>,

    pub description: Option<String>,

    #[validate(range(min = 10, max = 10000, message = "Price must be between 10 and 10000"))]
    pub price: Option<i64>,
}

/// Listing service errors
#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    #[error("{}", describe(.0))]
    Validation(ValidationErrors),

    #[error("Owner not found")]
    OwnerNotFound,

    #[error("Listing not found")]
    ListingNotFound,

    #[error("Title already in use")]
    TitleTaken,

    #[error("Price cannot be lowered below {current}")]
    PriceDecrease { current: i64 },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ListingError {
    /// Short label for metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            Self::Validation(_) => "invalid",
            Self::OwnerNotFound => "owner_not_found",
            Self::ListingNotFound => "listing_not_found",
            Self::TitleTaken => "title_taken",
            Self::PriceDecrease { .. } => "price_decrease",
            Self::Internal(_) => "error",
        }
    }
}

impl From<AppError> for ListingError {
    fn from(e: AppError) -> Self {
        match e {
            AppError::Conflict(_) => Self::TitleTaken,
            e => Self::Internal(e.to_string()),
        }
    }
}

/// ListingService implementation
pub struct ListingServiceImpl<U, L>
where
    U: UserRepository,
    L: ListingRepository,
{
    user_repo: Arc<U>,
    listing_repo: Arc<L>,
    id_generator: Arc<SnowflakeGenerator>,
}

impl<U, L> ListingServiceImpl<U, L>
where
    U: UserRepository,
    L: ListingRepository,
{
    pub fn new(
        user_repo: Arc<U>,
        listing_repo: Arc<L>,
        id_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            user_repo,
            listing_repo,
            id_generator,
        }
    }
}

#[async_trait]
impl<U, L> ListingService for ListingServiceImpl<U, L>
where
    U: UserRepository + 'static,
    L: ListingRepository + 'static,
{
    async fn create_listing(&self, request: CreateListingDto) -> Result<Listing, ListingError> {
        request.validate().map_err(ListingError::Validation)?;

        let owner = self
            .user_repo
            .find_by_email(&request.owner_email)
            .await?
            .ok_or(ListingError::OwnerNotFound)?;

        if self.listing_repo.title_exists(&request.title).await? {
            tracing::info!(title = %request.title, "Listing rejected: title taken");
            return Err(ListingError::TitleTaken);
        }

        // validate() already proved the date parses
        let last_modified_date = rules::parse_date(&request.last_modified_date)
            .ok_or_else(|| ListingError::Internal("date failed to parse".into()))?;

        let listing = Listing {
            id: self.id_generator.generate(),
            title: request.title,
            description: request.description,
            price: request.price,
            last_modified_date,
            owner_id: owner.id,
            created_at: Utc::now(),
        };

        let created = self.listing_repo.create(&listing).await?;
        tracing::info!(listing_id = created.id, owner_id = owner.id, "Listing created");

        Ok(created)
    }

    async fn update_listing(&self, request: UpdateListingDto) -> Result<Listing, ListingError> {
        request.validate().map_err(ListingError::Validation)?;

        let owner = self
            .user_repo
            .find_by_email(&request.owner_email)
            .await?
            .ok_or(ListingError::OwnerNotFound)?;

        let mut listing = match &request.listing_title {
            Some(title) => self
                .listing_repo
                .find_by_title(title)
                .await?
                .filter(|l| l.is_owned_by(owner.id)),
            None => self
                .listing_repo
                .find_by_owner(owner.id)
                .await?
                .into_iter()
                .next(),
        }
        .ok_or(ListingError::ListingNotFound)?;

        if let Some(title) = request.title {
            if title != listing.title {
                if self.listing_repo.title_exists(&title).await? {
                    return Err(ListingError::TitleTaken);
                }
                listing.title = title;
            }
        }

        if let Some(description) = request.description {
            listing.description = description;
        }
        if let Err(e) = validate_description(&listing.description, &listing.title) {
            let mut errors = ValidationErrors::new();
            errors.add("description", e);
            return Err(ListingError::Validation(errors));
        }

        if let Some(price) = request.price {
            if !listing.accepts_price(price) {
                tracing::info!(
                    listing_id = listing.id,
                    current = listing.price,
                    requested = price,
                    "Listing rejected: price decrease"
                );
                return Err(ListingError::PriceDecrease {
                    current: listing.price,
                });
            }
            listing.price = price;
        }

        listing.last_modified_date = Utc::now().date_naive();

        let updated = self.listing_repo.update(&listing).await?;
        tracing::info!(listing_id = updated.id, "Listing updated");

        Ok(updated)
    }

    async fn list_listings(&self) -> Result<Vec<Listing>, ListingError> {
        Ok(self.listing_repo.list_all().await?)
    }

    async fn listings_for_owner(&self, owner_id: i64) -> Result<Vec<Listing>, ListingError> {
        Ok(self.listing_repo.find_by_owner(owner_id).await?)
    }
}
