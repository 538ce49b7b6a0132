//! In-memory key repository for tests and embedded keys

use std::sync::RwLock;

use zeroize::Zeroizing;

use crate::domain::entities::{KeyPair, PrivateKey, PublicKey};
use crate::errors::KeyError;
use crate::services::keys::{parse_private_key_pem, parse_public_key_pem};

use super::r#trait::KeyRepository;

/// Origin reported in errors for keys held in memory
const MEMORY_ORIGIN: &str = "memory";

/// Key repository holding PEM documents in memory
///
/// Each load parses the stored PEM, exactly like the file repository does,
/// so the same error taxonomy applies. Keys can be replaced or cleared
/// between calls to model rotation and missing key material.
#[derive(Default)]
pub struct InMemoryKeyRepository {
    private_pem: RwLock<Option<Zeroizing<String>>>,
    public_pem: RwLock<Option<String>>,
}

impl std::fmt::Debug for InMemoryKeyRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryKeyRepository").finish_non_exhaustive()
    }
}

impl InMemoryKeyRepository {
    /// Creates an empty repository; every load fails with `KeyNotFound`
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository from PEM strings (useful for testing or embedded keys)
    pub fn from_pem(private_key_pem: impl Into<String>, public_key_pem: impl Into<String>) -> Self {
        Self {
            private_pem: RwLock::new(Some(Zeroizing::new(private_key_pem.into()))),
            public_pem: RwLock::new(Some(public_key_pem.into())),
        }
    }

    /// Creates a repository holding the PEM encoding of `pair`
    pub fn from_key_pair(pair: &KeyPair) -> Result<Self, KeyError> {
        let repository = Self::new();
        repository.replace_key_pair(pair)?;
        Ok(repository)
    }

    /// Swaps in a new key pair, as a key rotation would
    pub fn replace_key_pair(&self, pair: &KeyPair) -> Result<(), KeyError> {
        let private_pem = pair.private_key().to_pkcs8_pem()?;
        let public_pem = pair.public_key().to_public_key_pem()?;

        *write_guard(&self.private_pem) = Some(private_pem);
        *write_guard(&self.public_pem) = Some(public_pem);
        Ok(())
    }

    /// Replaces only the public key PEM
    pub fn set_public_key_pem(&self, pem: impl Into<String>) {
        *write_guard(&self.public_pem) = Some(pem.into());
    }

    /// Replaces only the private key PEM
    pub fn set_private_key_pem(&self, pem: impl Into<String>) {
        *write_guard(&self.private_pem) = Some(Zeroizing::new(pem.into()));
    }

    /// Removes the private key
    pub fn clear_private_key(&self) {
        *write_guard(&self.private_pem) = None;
    }

    /// Removes the public key
    pub fn clear_public_key(&self) {
        *write_guard(&self.public_pem) = None;
    }
}

impl KeyRepository for InMemoryKeyRepository {
    fn load_private_key(&self) -> Result<PrivateKey, KeyError> {
        let guard = self.private_pem.read().unwrap_or_else(|e| e.into_inner());
        match guard.as_ref() {
            Some(pem) => parse_private_key_pem(pem, MEMORY_ORIGIN),
            None => Err(not_found()),
        }
    }

    fn load_public_key(&self) -> Result<PublicKey, KeyError> {
        let guard = self.public_pem.read().unwrap_or_else(|e| e.into_inner());
        match guard.as_ref() {
            Some(pem) => parse_public_key_pem(pem, MEMORY_ORIGIN),
            None => Err(not_found()),
        }
    }
}

fn write_guard<T>(lock: &RwLock<T>) -> std::sync::RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|e| e.into_inner())
}

fn not_found() -> KeyError {
    KeyError::KeyNotFound {
        path: MEMORY_ORIGIN.to_string(),
    }
}
