//! Key management and token error types
//!
//! Every failure in this crate is a distinct variant so callers can decide how
//! much of it to expose. A caller-facing layer that wants a single opaque
//! "authentication failed" response can use [`TokenError::is_verification_failure`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while generating, persisting or loading RSA key material
#[derive(Error, Debug)]
pub enum KeyError {
    #[error("RSA key of {bits} bits is too weak, at least {minimum} bits are required")]
    WeakKey { bits: usize, minimum: usize },

    #[error("RSA key generation failed: {message}")]
    Generation { message: String },

    #[error("Failed to persist key to {path}: {message}")]
    Persistence { path: String, message: String },

    #[error("Key not found: {path}")]
    KeyNotFound { path: String },

    #[error("Failed to read key from {path}: {message}")]
    KeyRead { path: String, message: String },

    #[error("Invalid key format in {path}: {message}")]
    KeyFormat { path: String, message: String },

    #[error("Failed to encode key for signing: {message}")]
    Encoding { message: String },
}

/// Errors raised while issuing or verifying tokens
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Claim '{claim}' is reserved and set by the token service")]
    ReservedClaim { claim: String },

    #[error("Token validity must be positive, got {seconds} seconds")]
    InvalidValidity { seconds: i64 },

    #[error("Key unavailable: {0}")]
    KeyUnavailable(#[source] KeyError),

    #[error("Token generation failed")]
    TokenGenerationFailed,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token algorithm mismatch: expected {expected}, found {found}")]
    AlgorithmMismatch { expected: String, found: String },

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Missing or invalid claim: {claim}")]
    MissingClaim { claim: String },

    #[error("Token not yet valid")]
    TokenNotYetValid,

    #[error("Token expired")]
    TokenExpired,
}

impl TokenError {
    /// Stable machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            TokenError::ReservedClaim { .. } => "RESERVED_CLAIM",
            TokenError::InvalidValidity { .. } => "INVALID_VALIDITY",
            TokenError::KeyUnavailable(_) => "KEY_UNAVAILABLE",
            TokenError::TokenGenerationFailed => "TOKEN_GENERATION_FAILED",
            TokenError::MalformedToken => "MALFORMED_TOKEN",
            TokenError::AlgorithmMismatch { .. } => "ALGORITHM_MISMATCH",
            TokenError::InvalidSignature => "INVALID_SIGNATURE",
            TokenError::MissingClaim { .. } => "MISSING_CLAIM",
            TokenError::TokenNotYetValid => "TOKEN_NOT_YET_VALID",
            TokenError::TokenExpired => "TOKEN_EXPIRED",
        }
    }

    /// Whether the error describes a token presented for verification,
    /// as opposed to a server-side problem such as missing keys
    pub fn is_verification_failure(&self) -> bool {
        matches!(
            self,
            TokenError::MalformedToken
                | TokenError::AlgorithmMismatch { .. }
                | TokenError::InvalidSignature
                | TokenError::MissingClaim { .. }
                | TokenError::TokenNotYetValid
                | TokenError::TokenExpired
        )
    }
}

impl KeyError {
    /// Stable machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            KeyError::WeakKey { .. } => "WEAK_KEY",
            KeyError::Generation { .. } => "KEY_GENERATION_FAILED",
            KeyError::Persistence { .. } => "KEY_PERSISTENCE_FAILED",
            KeyError::KeyNotFound { .. } => "KEY_NOT_FOUND",
            KeyError::KeyRead { .. } => "KEY_READ_FAILED",
            KeyError::KeyFormat { .. } => "KEY_FORMAT_INVALID",
            KeyError::Encoding { .. } => "KEY_ENCODING_FAILED",
        }
    }
}

/// Unified error response structure for callers that serialize errors
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl ToString, message: impl ToString) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            timestamp: Utc::now(),
        }
    }

    /// Opaque response for any rejected token
    pub fn unauthorized() -> Self {
        Self::new("UNAUTHORIZED", "Invalid or expired token")
    }
}

/// Convert TokenError to ErrorResponse
impl From<TokenError> for ErrorResponse {
    fn from(err: TokenError) -> Self {
        ErrorResponse::new(err.code(), err.to_string())
    }
}

/// Convert KeyError to ErrorResponse
impl From<KeyError> for ErrorResponse {
    fn from(err: KeyError) -> Self {
        ErrorResponse::new(err.code(), err.to_string())
    }
}
