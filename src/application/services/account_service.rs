//! Account Service
//!
//! Handles registration, login and profile updates.

use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use async_trait::async_trait;
use validator::{Validate, ValidationErrors};

use crate::domain::{User, UserRepository};
use crate::shared::error::AppError;
use crate::shared::snowflake::SnowflakeGenerator;
use crate::shared::validation::{
    describe, validate_email, validate_password, validate_postal_code, validate_username,
};

/// Account service trait for dependency injection
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Register a new user with the default balance and empty billing details.
    async fn register(&self, request: RegisterUserDto) -> Result<User, AccountError>;

    /// Check credentials. Malformed input is rejected before any lookup.
    async fn login(&self, request: LoginDto) -> Result<User, AccountError>;

    /// Apply a profile update; nothing is written unless every supplied field is valid.
    async fn update_user(&self, request: UpdateUserDto) -> Result<User, AccountError>;

    /// Resolve a session subject to its account.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AccountError>;
}

/// Registration request
#[derive(Debug, Clone, Validate)]
pub struct RegisterUserDto {
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    #[validate(custom(function = "validate_email"))]
    pub email: String,

    #[validate(custom(function = "validate_password"))]
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Validate)]
pub struct LoginDto {
    #[validate(custom(function = "validate_email"))]
    pub email: String,

    #[validate(custom(function = "validate_password"))]
    pub password: String,
}

/// Profile update request. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, Validate)]
pub struct UpdateUserDto {
    /// Current email of the account being updated
    pub old_email: String,

    #[validate(custom(function = "validate_username"))]
    pub username: Option<String>,

    #[validate(custom(function = "validate_email"))]
    pub email: Option<String>,

    pub billing_address: Option<String>,

    #[validate(custom(function = "validate_postal_code"))]
    pub postal_code: Option<String>,
}

/// Account service errors
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("{}", describe(.0))]
    Validation(ValidationErrors),

    #[error("Email already registered")]
    EmailTaken,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User not found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccountError {
    /// Short label for metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            Self::Validation(_) => "invalid",
            Self::EmailTaken => "email_taken",
            Self::InvalidCredentials => "bad_credentials",
            Self::NotFound => "not_found",
            Self::Internal(_) => "error",
        }
    }
}

impl From<AppError> for AccountError {
    fn from(e: AppError) -> Self {
        match e {
            AppError::Conflict(_) => Self::EmailTaken,
            AppError::NotFound(_) => Self::NotFound,
            e => Self::Internal(e.to_string()),
        }
    }
}

/// Hash a password using Argon2id
pub fn hash_password(password: &str) -> Result<String, AccountError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AccountError::Internal(format!("Password hashing failed: {}", e)))
}

/// Verify a password against its hash; an unparsable hash never verifies.
pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            tracing::warn!(error = %e, "Stored password hash is malformed");
            false
        }
    }
}

/// AccountService implementation
pub struct AccountServiceImpl<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    id_generator: Arc<SnowflakeGenerator>,
}

impl<U> AccountServiceImpl<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, id_generator: Arc<SnowflakeGenerator>) -> Self {
        Self {
            user_repo,
            id_generator,
        }
    }
}

#[async_trait]
impl<U> AccountService for AccountServiceImpl<U>
where
    U: UserRepository + 'static,
{
    async fn register(&self, request: RegisterUserDto) -> Result<User, AccountError> {
        request.validate().map_err(AccountError::Validation)?;

        if self.user_repo.email_exists(&request.email).await? {
            tracing::info!(email = %request.email, "Registration rejected: email taken");
            return Err(AccountError::EmailTaken);
        }

        let password_hash = hash_password(&request.password)?;
        let user = User::new(
            self.id_generator.generate(),
            request.username,
            request.email,
            password_hash,
        );

        let created = self.user_repo.create(&user).await?;
        tracing::info!(user_id = created.id, email = %created.email, "User registered");

        Ok(created)
    }

    async fn login(&self, request: LoginDto) -> Result<User, AccountError> {
        request.validate().map_err(AccountError::Validation)?;

        let user = self
            .user_repo
            .find_by_email(&request.email)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        if !verify_password(&request.password, &user.password_hash) {
            tracing::info!(user_id = user.id, "Login rejected: wrong password");
            return Err(AccountError::InvalidCredentials);
        }

        Ok(user)
    }

    async fn update_user(&self, request: UpdateUserDto) -> Result<User, AccountError> {
        request.validate().map_err(AccountError::Validation)?;

        let mut user = self
            .user_repo
            .find_by_email(&request.old_email)
            .await?
            .ok_or(AccountError::NotFound)?;

        if let Some(new_email) = request.email {
            if new_email != user.email {
                if self.user_repo.email_exists(&new_email).await? {
                    return Err(AccountError::EmailTaken);
                }
                user.email = new_email;
            }
        }
        if let Some(username) = request.username {
            user.username = username;
        }
        if let Some(billing_address) = request.billing_address {
            user.billing_address = billing_address;
        }
        if let Some(postal_code) = request.postal_code {
            user.postal_code = postal_code;
        }

        let updated = self.user_repo.update(&user).await?;
        tracing::info!(user_id = updated.id, "Profile updated");

        Ok(updated)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AccountError> {
        Ok(self.user_repo.find_by_email(email).await?)
    }
}
