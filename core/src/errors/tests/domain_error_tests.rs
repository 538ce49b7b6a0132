//! Unit tests for domain error types

use std::error::Error as _;

use crate::errors::{DomainError, ErrorResponse, KeyError, TokenError};

#[test]
fn test_key_error_messages() {
    let error = KeyError::WeakKey {
        bits: 1024,
        minimum: 2048,
    };
    let message = error.to_string();
    assert!(message.contains("1024"));
    assert!(message.contains("2048"));

    let error = KeyError::KeyNotFound {
        path: "keys/public_key.pem".to_string(),
    };
    assert_eq!(error.to_string(), "Key not found: keys/public_key.pem");
}

#[test]
fn test_token_error_conversion() {
    let error = TokenError::TokenExpired;
    let response: ErrorResponse = error.into();
    assert_eq!(response.error, "TOKEN_EXPIRED");
    assert_eq!(response.message, "Token expired");
}

#[test]
fn test_key_unavailable_keeps_source() {
    let error = TokenError::KeyUnavailable(KeyError::KeyNotFound {
        path: "missing.pem".to_string(),
    });

    let source = error.source().expect("source should be preserved");
    assert!(source.to_string().contains("missing.pem"));
    assert!(!error.is_verification_failure());
}

#[test]
fn test_verification_failures_are_classified() {
    let failures = [
        TokenError::MalformedToken,
        TokenError::AlgorithmMismatch {
            expected: "RS256".to_string(),
            found: "HS256".to_string(),
        },
        TokenError::InvalidSignature,
        TokenError::TokenNotYetValid,
        TokenError::TokenExpired,
    ];
    for failure in &failures {
        assert!(failure.is_verification_failure(), "{failure:?}");
    }

    let issuance = TokenError::ReservedClaim {
        claim: "exp".to_string(),
    };
    assert!(!issuance.is_verification_failure());
}

#[test]
fn test_domain_error_bridges_to_response() {
    let error: DomainError = KeyError::KeyFormat {
        path: "keys/private_key.pem".to_string(),
        message: "not a PEM document".to_string(),
    }
    .into();
    let response: ErrorResponse = error.into();
    assert_eq!(response.error, "KEY_FORMAT_INVALID");

    let error: DomainError = TokenError::InvalidSignature.into();
    assert!(matches!(
        error.as_token_error(),
        Some(TokenError::InvalidSignature)
    ));
}

#[test]
fn test_unauthorized_response_hides_details() {
    let response = ErrorResponse::unauthorized();
    assert_eq!(response.error, "UNAUTHORIZED");
    assert!(!response.message.contains("signature"));
}

#[test]
fn test_encoding_error_code() {
    let error = KeyError::Encoding {
        message: "DER encoding failed".to_string(),
    };
    assert_eq!(error.code(), "KEY_ENCODING_FAILED");

    let response: ErrorResponse = DomainError::from(error).into();
    assert_eq!(response.error, "KEY_ENCODING_FAILED");
    assert!(response.message.contains("DER encoding failed"));
}

#[test]
fn test_config_error_response() {
    let error = DomainError::Config {
        message: "Invalid JWT_ALGORITHM".to_string(),
    };
    let response: ErrorResponse = error.into();
    assert_eq!(response.error, "CONFIG_ERROR");
    assert!(response.message.contains("JWT_ALGORITHM"));
}
