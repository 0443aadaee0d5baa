//! User entity and repository trait.
//!
//! Maps to the `users` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::rules::DEFAULT_BALANCE;
use crate::shared::error::AppError;

/// Represents a marketplace account.
///
/// Maps to the `users` table:
/// - id: BIGINT PRIMARY KEY (Snowflake ID)
/// - email: VARCHAR(255) NOT NULL UNIQUE
/// - username: VARCHAR(32) NOT NULL
/// - password_hash: VARCHAR(255) NOT NULL
/// - billing_address: TEXT NOT NULL DEFAULT ''
/// - postal_code: VARCHAR(6) NOT NULL DEFAULT ''
/// - balance: BIGINT NOT NULL DEFAULT 100
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Snowflake ID (primary key)
    pub id: i64,

    /// Display name (3-19 characters)
    pub username: String,

    /// Email address (unique, used to log in)
    pub email: String,

    /// Argon2 password hash
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Free-form billing address, empty until the user sets one
    pub billing_address: String,

    /// Canadian postal code, empty until the user sets one
    pub postal_code: String,

    /// Spendable balance in whole currency units
    pub balance: i64,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl User {
    /// A freshly registered account: default balance, no billing details.
    pub fn new(id: i64, username: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            email,
            password_hash,
            billing_address: String::new(),
            postal_code: String::new(),
            balance: DEFAULT_BALANCE,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the balance covers `amount`.
    pub fn can_afford(&self, amount: i64) -> bool {
        self.balance >= amount
    }
}

/// Repository trait for User data access operations.
///
/// Implementations of this trait handle the actual database interactions.
/// The trait is defined in the domain layer to maintain dependency inversion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Check if an email address is already registered.
    async fn email_exists(&self, email: &str) -> Result<bool, AppError>;

    /// Create a new user in the database.
    async fn create(&self, user: &User) -> Result<User, AppError>;

    /// Persist the mutable profile fields (username, email, billing address, postal code).
    async fn update(&self, user: &User) -> Result<User, AppError>;
}
