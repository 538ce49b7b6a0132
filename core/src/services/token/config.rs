//! Configuration for the token service

use chrono::Duration;
use jsonwebtoken::Algorithm;

use crate::errors::DomainError;

/// Access token lifetime used when the caller does not pass one
pub const DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 30;

/// Configuration for the token service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenServiceConfig {
    /// JWT signing algorithm, must be RS256
    pub algorithm: Algorithm,
    /// Access token expiry in minutes
    pub access_token_expiry_minutes: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::RS256,
            access_token_expiry_minutes: DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES,
        }
    }
}

impl TokenServiceConfig {
    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry_minutes = minutes;
        self
    }

    /// Default validity window for issued tokens
    pub fn default_validity(&self) -> Duration {
        Duration::try_minutes(self.access_token_expiry_minutes).unwrap_or_else(Duration::zero)
    }

    /// Creates config from environment variables
    ///
    /// - `JWT_ALGORITHM`: signing algorithm name (default `RS256`)
    /// - `JWT_ACCESS_TOKEN_EXPIRE_MINUTES`: default token lifetime (default 30)
    pub fn from_env() -> Result<Self, DomainError> {
        let algorithm = std::env::var("JWT_ALGORITHM")
            .unwrap_or_else(|_| "RS256".to_string())
            .parse::<Algorithm>()
            .map_err(|e| DomainError::Config {
                message: format!("Invalid JWT_ALGORITHM: {}", e),
            })?;

        Ok(Self {
            algorithm,
            access_token_expiry_minutes: std::env::var("JWT_ACCESS_TOKEN_EXPIRE_MINUTES")
                .unwrap_or_else(|_| DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES.to_string())
                .parse()
                .unwrap_or(DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES),
        })
    }

    /// Checks the configuration can back an RS256 token service
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.algorithm != Algorithm::RS256 {
            return Err(DomainError::Config {
                message: format!(
                    "Unsupported JWT algorithm {:?}, only RS256 is allowed",
                    self.algorithm
                ),
            });
        }
        if self.access_token_expiry_minutes <= 0
            || Duration::try_minutes(self.access_token_expiry_minutes).is_none()
        {
            return Err(DomainError::Config {
                message: format!(
                    "Access token expiry must be a positive number of minutes, got {}",
                    self.access_token_expiry_minutes
                ),
            });
        }
        Ok(())
    }
}
