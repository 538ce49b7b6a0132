//! RSA key material used for RS256 signing and verification.

use jsonwebtoken::{DecodingKey, EncodingKey};
use rsa::pkcs1::{EncodeRsaPrivateKey, EncodeRsaPublicKey};
use rsa::pkcs8::{EncodePrivateKey, EncodePublicKey, LineEnding};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};
use zeroize::Zeroizing;

use crate::errors::KeyError;

/// Minimum accepted RSA modulus size in bits
pub const MIN_KEY_BITS: usize = 2048;

/// RSA private key used to sign tokens
#[derive(Clone)]
pub struct PrivateKey(RsaPrivateKey);

/// RSA public key used to verify tokens
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey(RsaPublicKey);

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateKey")
            .field("bits", &self.bits())
            .finish_non_exhaustive()
    }
}

impl PrivateKey {
    /// Wraps an RSA private key
    pub fn new(inner: RsaPrivateKey) -> Self {
        Self(inner)
    }

    /// Modulus size in bits
    pub fn bits(&self) -> usize {
        self.0.n().bits()
    }

    /// The public half of this key
    pub fn public_key(&self) -> PublicKey {
        PublicKey(RsaPublicKey::from(&self.0))
    }

    /// Serializes the key as an unencrypted PKCS#8 PEM document
    pub fn to_pkcs8_pem(&self) -> Result<Zeroizing<String>, KeyError> {
        self.0
            .to_pkcs8_pem(LineEnding::LF)
            .map_err(|e| KeyError::Encoding {
                message: format!("Failed to encode private key as PKCS#8: {}", e),
            })
    }

    /// Builds the signing key handed to `jsonwebtoken`
    pub fn encoding_key(&self) -> Result<EncodingKey, KeyError> {
        let der = self.0.to_pkcs1_der().map_err(|e| KeyError::Encoding {
            message: format!("Failed to encode private key as PKCS#1: {}", e),
        })?;
        Ok(EncodingKey::from_rsa_der(der.as_bytes()))
    }
}

impl PublicKey {
    /// Wraps an RSA public key
    pub fn new(inner: RsaPublicKey) -> Self {
        Self(inner)
    }

    /// Modulus size in bits
    pub fn bits(&self) -> usize {
        self.0.n().bits()
    }

    /// Serializes the key as a SubjectPublicKeyInfo PEM document
    pub fn to_public_key_pem(&self) -> Result<String, KeyError> {
        self.0
            .to_public_key_pem(LineEnding::LF)
            .map_err(|e| KeyError::Encoding {
                message: format!("Failed to encode public key as SPKI: {}", e),
            })
    }

    /// Builds the verification key handed to `jsonwebtoken`
    pub fn decoding_key(&self) -> Result<DecodingKey, KeyError> {
        let der = self.0.to_pkcs1_der().map_err(|e| KeyError::Encoding {
            message: format!("Failed to encode public key as PKCS#1: {}", e),
        })?;
        Ok(DecodingKey::from_rsa_der(der.as_bytes()))
    }
}

/// An RSA private key together with its public half.
///
/// The public key is always derived from the private key, so the pair can
/// never be mismatched.
#[derive(Clone, Debug)]
pub struct KeyPair {
    private_key: PrivateKey,
    public_key: PublicKey,
}

impl KeyPair {
    /// Builds a pair by deriving the public key from `private_key`
    pub fn from_private_key(private_key: PrivateKey) -> Self {
        let public_key = private_key.public_key();
        Self {
            private_key,
            public_key,
        }
    }

    /// The signing half
    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// The verification half
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Modulus size in bits
    pub fn bits(&self) -> usize {
        self.private_key.bits()
    }
}
