//! Shared fixtures for unit tests

use once_cell::sync::Lazy;

use crate::domain::entities::KeyPair;
use crate::services::keys::generate_default_key_pair;

/// Key pair generated once per test binary
pub static TEST_KEY_PAIR: Lazy<KeyPair> =
    Lazy::new(|| generate_default_key_pair().expect("Failed to generate test key pair"));

/// A second, unrelated key pair for rotation and mismatch tests
pub static OTHER_KEY_PAIR: Lazy<KeyPair> =
    Lazy::new(|| generate_default_key_pair().expect("Failed to generate test key pair"));
