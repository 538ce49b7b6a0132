//! File-backed key repository

use std::path::{Path, PathBuf};

use crate::domain::entities::{PrivateKey, PublicKey};
use crate::errors::KeyError;
use crate::services::keys::{self, KeyPathConfig};

use super::r#trait::KeyRepository;

/// Reads PEM key files from disk on every call
#[derive(Debug, Clone)]
pub struct FileKeyRepository {
    private_key_path: PathBuf,
    public_key_path: PathBuf,
}

impl FileKeyRepository {
    /// Creates a repository over explicit key file paths
    pub fn new(private_key_path: impl Into<PathBuf>, public_key_path: impl Into<PathBuf>) -> Self {
        Self {
            private_key_path: private_key_path.into(),
            public_key_path: public_key_path.into(),
        }
    }

    /// Creates a repository from a path configuration
    pub fn from_config(config: &KeyPathConfig) -> Self {
        Self::new(&config.private_key_path, &config.public_key_path)
    }

    /// Creates a repository from `JWT_PRIVATE_KEY_PATH` / `JWT_PUBLIC_KEY_PATH`
    pub fn from_env() -> Self {
        Self::from_config(&KeyPathConfig::from_env())
    }

    /// Returns the paths to the key files
    pub fn key_paths(&self) -> (&Path, &Path) {
        (&self.private_key_path, &self.public_key_path)
    }
}

impl KeyRepository for FileKeyRepository {
    fn load_private_key(&self) -> Result<PrivateKey, KeyError> {
        keys::load_private_key(&self.private_key_path)
    }

    fn load_public_key(&self) -> Result<PublicKey, KeyError> {
        keys::load_public_key(&self.public_key_path)
    }
}
