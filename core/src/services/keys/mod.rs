//! Key provider for RS256 signing material
//!
//! This module handles the administrative side of key management:
//! - RSA key pair generation with a minimum strength of 2048 bits
//! - Persisting keys as PKCS#8 / SubjectPublicKeyInfo PEM files
//! - Loading either key back from storage on demand
//!
//! Loading never caches, so a key file replaced on disk is picked up by the
//! next call.

mod config;
mod generator;
mod loader;

#[cfg(test)]
mod tests;

pub use config::{KeyPathConfig, DEFAULT_PRIVATE_KEY_PATH, DEFAULT_PUBLIC_KEY_PATH};
pub use generator::{
    generate_default_key_pair, generate_key_pair, persist_key_pair, DEFAULT_KEY_BITS,
    PUBLIC_EXPONENT,
};
pub use loader::{load_private_key, load_public_key, parse_private_key_pem, parse_public_key_pem};
