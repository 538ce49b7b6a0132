//! Main token service implementation

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::Duration;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, Header, Validation};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::entities::{ClaimSet, CLAIM_EXPIRES_AT, CLAIM_ISSUED_AT, CLAIM_NOT_BEFORE};
use crate::errors::{DomainError, TokenError};
use crate::repositories::KeyRepository;

use super::clock::{Clock, SystemClock};
use super::config::TokenServiceConfig;

/// Algorithm name every accepted token header must carry
const EXPECTED_ALGORITHM: &str = "RS256";

/// Header fields inspected before any cryptographic work
///
/// `alg` is kept as raw JSON so a non-string value is reported as an
/// algorithm mismatch rather than a malformed token.
#[derive(Deserialize)]
struct RawHeader {
    alg: Value,
}

/// Service issuing and verifying RS256 access tokens
///
/// Key material is fetched from the repository on every call, so the service
/// itself holds no key state and picks up rotated keys immediately.
pub struct TokenService<K: KeyRepository, C: Clock = SystemClock> {
    keys: K,
    clock: C,
    config: TokenServiceConfig,
    validation: Validation,
}

impl<K: KeyRepository> TokenService<K, SystemClock> {
    /// Creates a new token service instance using the wall clock
    ///
    /// # Arguments
    ///
    /// * `keys` - Repository providing the RS256 key pair
    /// * `config` - Token service configuration
    ///
    /// # Returns
    ///
    /// A new `TokenService` or a configuration error if the algorithm is not
    /// RS256 or the default expiry is not positive
    pub fn new(keys: K, config: TokenServiceConfig) -> Result<Self, DomainError> {
        Self::with_clock(keys, config, SystemClock)
    }
}

impl<K: KeyRepository, C: Clock> TokenService<K, C> {
    /// Creates a new token service reading time from `clock`
    pub fn with_clock(keys: K, config: TokenServiceConfig, clock: C) -> Result<Self, DomainError> {
        config.validate()?;

        // Only the signature is checked by jsonwebtoken; the validity window
        // is checked here against the injected clock.
        let mut validation = Validation::new(Algorithm::RS256);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        Ok(Self {
            keys,
            clock,
            config,
            validation,
        })
    }

    /// Returns the service configuration
    pub fn config(&self) -> &TokenServiceConfig {
        &self.config
    }

    /// Issues a signed token carrying `claims`
    ///
    /// # Arguments
    ///
    /// * `claims` - Application claims; must not contain `exp`, `iat` or `nbf`
    /// * `validity` - Token lifetime, defaults to the configured expiry
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Compact `header.payload.signature` token
    /// * `Err(TokenError::ReservedClaim)` - A temporal claim was supplied
    /// * `Err(TokenError::InvalidValidity)` - `validity` is not positive
    /// * `Err(TokenError::KeyUnavailable)` - The private key could not be loaded
    pub fn issue(&self, claims: &ClaimSet, validity: Option<Duration>) -> Result<String, DomainError> {
        if let Some(claim) = claims.reserved_claim() {
            return Err(TokenError::ReservedClaim {
                claim: claim.to_string(),
            }
            .into());
        }

        let seconds = validity
            .unwrap_or_else(|| self.config.default_validity())
            .num_seconds();
        if seconds <= 0 {
            return Err(TokenError::InvalidValidity { seconds }.into());
        }

        let now = self.clock.now().timestamp();
        let expires_at = now
            .checked_add(seconds)
            .ok_or(TokenError::InvalidValidity { seconds })?;

        let encoding_key = self
            .keys
            .load_private_key()
            .and_then(|key| key.encoding_key())
            .map_err(|e| {
                tracing::error!(
                    event = "signing_key_unavailable",
                    error = %e,
                    "Cannot issue token without private key"
                );
                TokenError::KeyUnavailable(e)
            })?;

        let mut payload = claims.clone().into_inner();
        payload.insert(CLAIM_EXPIRES_AT.to_string(), Value::from(expires_at));
        payload.insert(CLAIM_ISSUED_AT.to_string(), Value::from(now));
        payload.insert(CLAIM_NOT_BEFORE.to_string(), Value::from(now));

        let header = Header::new(self.config.algorithm);
        let token = encode(&header, &payload, &encoding_key).map_err(|e| {
            tracing::error!(event = "token_signing_failed", error = %e, "Failed to sign token");
            TokenError::TokenGenerationFailed
        })?;

        tracing::debug!(
            event = "token_issued",
            claim_count = claims.len(),
            expires_at = expires_at,
            "Issued access token"
        );

        Ok(token)
    }

    /// Verifies a token and returns its claims
    ///
    /// Checks run in a fixed order: structure, header algorithm, signature,
    /// then the `[nbf, exp)` window. The algorithm is checked before any key
    /// is loaded.
    ///
    /// # Returns
    ///
    /// * `Ok(ClaimSet)` - All claims, including `exp`, `iat` and `nbf`
    /// * `Err(TokenError)` - The first check that failed
    pub fn verify(&self, token: &str) -> Result<ClaimSet, DomainError> {
        self.verify_token(token).map_err(|e| {
            if e.is_verification_failure() {
                tracing::warn!(event = "token_rejected", reason = e.code(), "Token verification failed");
            } else {
                tracing::error!(event = "token_verification_error", error = %e, "Token verification could not run");
            }
            DomainError::Token(e)
        })
    }

    /// Decodes the payload without checking signature or validity window
    ///
    /// Only for diagnostics; never use the result for authorization.
    pub fn decode_unverified(&self, token: &str) -> Result<ClaimSet, DomainError> {
        let (_, payload) = split_token(token)?;
        Ok(ClaimSet::from(payload))
    }

    fn verify_token(&self, token: &str) -> Result<ClaimSet, TokenError> {
        let (header, _) = split_token(token)?;

        if header.alg.as_str() != Some(EXPECTED_ALGORITHM) {
            let found = match header.alg {
                Value::String(name) => name,
                other => other.to_string(),
            };
            return Err(TokenError::AlgorithmMismatch {
                expected: EXPECTED_ALGORITHM.to_string(),
                found,
            });
        }

        let decoding_key = self
            .keys
            .load_public_key()
            .and_then(|key| key.decoding_key())
            .map_err(TokenError::KeyUnavailable)?;

        let data = decode::<Map<String, Value>>(token, &decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                // Header and payload were decoded already, so a base64 failure
                // here comes from the signature segment.
                ErrorKind::InvalidSignature | ErrorKind::Base64(_) | ErrorKind::Crypto(_) => {
                    TokenError::InvalidSignature
                }
                _ => TokenError::MalformedToken,
            })?;

        let claims = ClaimSet::from(data.claims);
        let not_before = required_seconds(&claims, CLAIM_NOT_BEFORE)?;
        let expires_at = required_seconds(&claims, CLAIM_EXPIRES_AT)?;

        let now = self.clock.now().timestamp();
        if now < not_before {
            return Err(TokenError::TokenNotYetValid);
        }
        if now >= expires_at {
            return Err(TokenError::TokenExpired);
        }

        Ok(claims)
    }
}

/// Splits a compact token and decodes its header and payload segments
fn split_token(token: &str) -> Result<(RawHeader, Map<String, Value>), TokenError> {
    let mut segments = token.split('.');
    let (Some(header), Some(payload), Some(signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(TokenError::MalformedToken);
    };

    if header.is_empty() || payload.is_empty() || signature.is_empty() {
        return Err(TokenError::MalformedToken);
    }

    Ok((decode_segment(header)?, decode_segment(payload)?))
}

fn decode_segment<T: DeserializeOwned>(segment: &str) -> Result<T, TokenError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|_| TokenError::MalformedToken)?;
    serde_json::from_slice(&bytes).map_err(|_| TokenError::MalformedToken)
}

fn required_seconds(claims: &ClaimSet, name: &str) -> Result<i64, TokenError> {
    claims.seconds(name).ok_or_else(|| TokenError::MissingClaim {
        claim: name.to_string(),
    })
}
