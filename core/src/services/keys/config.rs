//! Storage locations for the RS256 key pair

use std::path::PathBuf;

/// Default location of the PEM-encoded private key
pub const DEFAULT_PRIVATE_KEY_PATH: &str = "keys/private_key.pem";

/// Default location of the PEM-encoded public key
pub const DEFAULT_PUBLIC_KEY_PATH: &str = "keys/public_key.pem";

/// Paths of the private and public key files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPathConfig {
    /// Path to private key file
    pub private_key_path: PathBuf,
    /// Path to public key file
    pub public_key_path: PathBuf,
}

impl Default for KeyPathConfig {
    fn default() -> Self {
        Self {
            private_key_path: PathBuf::from(DEFAULT_PRIVATE_KEY_PATH),
            public_key_path: PathBuf::from(DEFAULT_PUBLIC_KEY_PATH),
        }
    }
}

impl KeyPathConfig {
    /// Creates a config from explicit paths
    pub fn new(private_key_path: impl Into<PathBuf>, public_key_path: impl Into<PathBuf>) -> Self {
        Self {
            private_key_path: private_key_path.into(),
            public_key_path: public_key_path.into(),
        }
    }

    /// Uses `private_key.pem` and `public_key.pem` inside `dir`
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            private_key_path: dir.join("private_key.pem"),
            public_key_path: dir.join("public_key.pem"),
        }
    }

    /// Creates config from environment variables
    ///
    /// - `JWT_PRIVATE_KEY_PATH`: Path to private key file
    /// - `JWT_PUBLIC_KEY_PATH`: Path to public key file
    pub fn from_env() -> Self {
        Self {
            private_key_path: std::env::var("JWT_PRIVATE_KEY_PATH")
                .unwrap_or_else(|_| DEFAULT_PRIVATE_KEY_PATH.to_string())
                .into(),
            public_key_path: std::env::var("JWT_PUBLIC_KEY_PATH")
                .unwrap_or_else(|_| DEFAULT_PUBLIC_KEY_PATH.to_string())
                .into(),
        }
    }
}
