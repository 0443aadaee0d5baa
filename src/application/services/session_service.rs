//! Session Service
//!
//! Issues and checks the signed token kept in the login cookie.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::SessionSettings;

/// JWT claims carried by the session cookie
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (user email)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

/// Session errors
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session expired")]
    Expired,

    #[error("Invalid session token")]
    InvalidToken,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Stateless session tokens signed with the configured secret.
#[derive(Clone)]
pub struct SessionService {
    settings: SessionSettings,
}

impl SessionService {
    pub fn new(settings: SessionSettings) -> Self {
        Self { settings }
    }

    pub fn cookie_name(&self) -> &str {
        &self.settings.cookie_name
    }

    pub fn secure_cookie(&self) -> bool {
        self.settings.secure_cookie
    }

    /// Session lifetime; the login handler uses it as the cookie's max-age.
    pub fn lifetime(&self) -> Duration {
        Duration::hours(self.settings.expiry_hours)
    }

    /// Sign a token for `email`.
    pub fn issue(&self, email: &str) -> Result<String, SessionError> {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: email.to_string(),
            exp: (now + self.lifetime()).timestamp(),
            iat: now.timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.settings.secret.as_bytes()),
        )
        .map_err(|e| SessionError::Internal(format!("Token generation failed: {}", e)))
    }

    /// Decode and validate a token.
    pub fn decode(&self, token: &str) -> Result<SessionClaims, SessionError> {
        let token_data = decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(self.settings.secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => SessionError::Expired,
            _ => SessionError::InvalidToken,
        })?;

        Ok(token_data.claims)
    }

    /// The email a token was issued for, or `None` if it does not verify.
    pub fn resolve(&self, token: &str) -> Option<String> {
        match self.decode(token) {
            Ok(claims) => Some(claims.sub),
            Err(e) => {
                tracing::debug!(error = %e, "Session token rejected");
                None
            }
        }
    }
}
