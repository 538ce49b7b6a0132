//! Environment-driven settings for the token core

use crate::errors::DomainError;
use crate::services::keys::KeyPathConfig;
use crate::services::token::TokenServiceConfig;

/// Settings needed to stand up key storage and the token service
///
/// Read from the process environment:
/// - `JWT_ALGORITHM` (default `RS256`)
/// - `JWT_ACCESS_TOKEN_EXPIRE_MINUTES` (default 30)
/// - `JWT_PRIVATE_KEY_PATH` (default `keys/private_key.pem`)
/// - `JWT_PUBLIC_KEY_PATH` (default `keys/public_key.pem`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthConfig {
    /// Token issuance settings
    pub token: TokenServiceConfig,
    /// Key file locations
    pub keys: KeyPathConfig,
}

impl AuthConfig {
    /// Loads and validates the configuration from environment variables
    pub fn from_env() -> Result<Self, DomainError> {
        let config = Self {
            token: TokenServiceConfig::from_env()?,
            keys: KeyPathConfig::from_env(),
        };
        config.token.validate()?;
        Ok(config)
    }
}
