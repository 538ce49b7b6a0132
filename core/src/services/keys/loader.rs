//! Loading PEM-encoded RSA keys from storage

use std::fs;
use std::io;
use std::path::Path;

use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::domain::entities::{PrivateKey, PublicKey, MIN_KEY_BITS};
use crate::errors::KeyError;

/// Loads the private key stored at `src`
///
/// # Returns
///
/// * `Ok(PrivateKey)` - Key parsed successfully
/// * `Err(KeyError::KeyNotFound)` - Nothing exists at `src`
/// * `Err(KeyError::KeyRead)` - The file exists but could not be read
/// * `Err(KeyError::KeyFormat)` - The content is not an RSA private key
/// * `Err(KeyError::WeakKey)` - The key is smaller than 2048 bits
pub fn load_private_key(src: impl AsRef<Path>) -> Result<PrivateKey, KeyError> {
    let src = src.as_ref();
    let pem = read_key_file(src)?;
    parse_private_key_pem(&pem, &src.display().to_string())
}

/// Loads the public key stored at `src`
///
/// Fails the same way as [`load_private_key`].
pub fn load_public_key(src: impl AsRef<Path>) -> Result<PublicKey, KeyError> {
    let src = src.as_ref();
    let pem = read_key_file(src)?;
    parse_public_key_pem(&pem, &src.display().to_string())
}

/// Parses a private key from PKCS#8 PEM, falling back to PKCS#1
///
/// `origin` names where the PEM came from and is only used in errors.
pub fn parse_private_key_pem(pem: &str, origin: &str) -> Result<PrivateKey, KeyError> {
    let key = RsaPrivateKey::from_pkcs8_pem(pem)
        .or_else(|pkcs8_err| {
            RsaPrivateKey::from_pkcs1_pem(pem).map_err(|_| pkcs8_err.to_string())
        })
        .map_err(|message| format_error(origin, message))?;

    let key = PrivateKey::new(key);
    ensure_strength(key.bits())?;
    Ok(key)
}

/// Parses a public key from SubjectPublicKeyInfo PEM, falling back to PKCS#1
pub fn parse_public_key_pem(pem: &str, origin: &str) -> Result<PublicKey, KeyError> {
    let key = RsaPublicKey::from_public_key_pem(pem)
        .or_else(|spki_err| {
            RsaPublicKey::from_pkcs1_pem(pem).map_err(|_| spki_err.to_string())
        })
        .map_err(|message| format_error(origin, message))?;

    let key = PublicKey::new(key);
    ensure_strength(key.bits())?;
    Ok(key)
}

fn read_key_file(path: &Path) -> Result<String, KeyError> {
    let bytes = fs::read(path).map_err(|e| {
        let path = path.display().to_string();
        if e.kind() == io::ErrorKind::NotFound {
            tracing::warn!(event = "key_not_found", path = %path, "Key file does not exist");
            KeyError::KeyNotFound { path }
        } else {
            tracing::error!(event = "key_read_failed", path = %path, error = %e, "Failed to read key file");
            KeyError::KeyRead {
                path,
                message: e.to_string(),
            }
        }
    })?;

    String::from_utf8(bytes).map_err(|_| {
        format_error(
            &path.display().to_string(),
            "key file is not valid UTF-8 text".to_string(),
        )
    })
}

fn ensure_strength(bits: usize) -> Result<(), KeyError> {
    if bits < MIN_KEY_BITS {
        return Err(KeyError::WeakKey {
            bits,
            minimum: MIN_KEY_BITS,
        });
    }
    Ok(())
}

fn format_error(origin: &str, message: String) -> KeyError {
    tracing::error!(event = "key_format_invalid", path = %origin, "Key material could not be parsed");
    KeyError::KeyFormat {
        path: origin.to_string(),
        message,
    }
}
