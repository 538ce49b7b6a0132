//! RSA key pair generation and persistence

use std::fs;
use std::path::Path;

use rand::rngs::OsRng;
use rsa::{BigUint, RsaPrivateKey};

use crate::domain::entities::{KeyPair, PrivateKey, MIN_KEY_BITS};
use crate::errors::KeyError;

/// Key size used when the caller does not ask for one
pub const DEFAULT_KEY_BITS: usize = 2048;

/// Standard RSA public exponent
pub const PUBLIC_EXPONENT: u32 = 65537;

/// Generates a fresh RSA key pair with the default 2048-bit modulus
pub fn generate_default_key_pair() -> Result<KeyPair, KeyError> {
    generate_key_pair(DEFAULT_KEY_BITS)
}

/// Generates a fresh RSA key pair
///
/// # Arguments
///
/// * `bits` - Modulus size, at least [`MIN_KEY_BITS`]
///
/// # Returns
///
/// * `Ok(KeyPair)` - The generated pair
/// * `Err(KeyError::WeakKey)` - `bits` is below the minimum
/// * `Err(KeyError::Generation)` - The RSA implementation failed
pub fn generate_key_pair(bits: usize) -> Result<KeyPair, KeyError> {
    if bits < MIN_KEY_BITS {
        tracing::warn!(
            event = "weak_key_rejected",
            bits = bits,
            minimum = MIN_KEY_BITS,
            "Refusing to generate RSA key below minimum strength"
        );
        return Err(KeyError::WeakKey {
            bits,
            minimum: MIN_KEY_BITS,
        });
    }

    let exponent = BigUint::from(PUBLIC_EXPONENT);
    let private_key = RsaPrivateKey::new_with_exp(&mut OsRng, bits, &exponent).map_err(|e| {
        KeyError::Generation {
            message: e.to_string(),
        }
    })?;

    tracing::info!(event = "key_pair_generated", bits = bits, "Generated RSA key pair");

    Ok(KeyPair::from_private_key(PrivateKey::new(private_key)))
}

/// Writes the key pair to two PEM files
///
/// The private key is written as unencrypted PKCS#8, the public key as
/// SubjectPublicKeyInfo. Parent directories are created and existing files
/// are overwritten. On Unix the private key file is readable by its owner only.
pub fn persist_key_pair(
    pair: &KeyPair,
    private_dest: impl AsRef<Path>,
    public_dest: impl AsRef<Path>,
) -> Result<(), KeyError> {
    let private_dest = private_dest.as_ref();
    let public_dest = public_dest.as_ref();

    let private_pem = pair
        .private_key()
        .to_pkcs8_pem()
        .map_err(|e| persistence_error(private_dest, e))?;
    let public_pem = pair
        .public_key()
        .to_public_key_pem()
        .map_err(|e| persistence_error(public_dest, e))?;

    write_key_file(private_dest, private_pem.as_bytes())?;
    restrict_permissions(private_dest)?;
    write_key_file(public_dest, public_pem.as_bytes())?;

    tracing::info!(
        event = "key_pair_persisted",
        private_key_path = %private_dest.display(),
        public_key_path = %public_dest.display(),
        "Persisted RSA key pair"
    );

    Ok(())
}

fn write_key_file(path: &Path, contents: &[u8]) -> Result<(), KeyError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| persistence_error(path, e))?;
    }

    fs::write(path, contents).map_err(|e| {
        tracing::error!(
            event = "key_persist_failed",
            path = %path.display(),
            error = %e,
            "Failed to write key file"
        );
        persistence_error(path, e)
    })
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<(), KeyError> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
        .map_err(|e| persistence_error(path, e))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<(), KeyError> {
    Ok(())
}

fn persistence_error(path: &Path, err: impl std::fmt::Display) -> KeyError {
    KeyError::Persistence {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}
