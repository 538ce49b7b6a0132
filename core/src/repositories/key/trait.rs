//! Key repository trait defining how the token service obtains key material.

use std::sync::Arc;

use crate::domain::entities::{PrivateKey, PublicKey};
use crate::errors::KeyError;

/// Capability interface for loading the RS256 key pair
///
/// The token service calls these on every issuance and verification, so
/// implementations must reflect the current key material: a key swapped in
/// storage between two calls has to be visible to the second call.
///
/// # Example
/// ```no_run
/// # use tm_core::repositories::{FileKeyRepository, KeyRepository};
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let keys = FileKeyRepository::new("keys/private_key.pem", "keys/public_key.pem");
///
/// let public_key = keys.load_public_key()?;
/// println!("Verifying with a {}-bit key", public_key.bits());
/// # Ok(())
/// # }
/// ```
pub trait KeyRepository: Send + Sync {
    /// Loads the private key used to sign tokens
    ///
    /// # Returns
    /// * `Ok(PrivateKey)` - The current signing key
    /// * `Err(KeyError)` - Key missing, unreadable or malformed
    fn load_private_key(&self) -> Result<PrivateKey, KeyError>;

    /// Loads the public key used to verify tokens
    ///
    /// # Returns
    /// * `Ok(PublicKey)` - The current verification key
    /// * `Err(KeyError)` - Key missing, unreadable or malformed
    fn load_public_key(&self) -> Result<PublicKey, KeyError>;
}

impl<R: KeyRepository + ?Sized> KeyRepository for Arc<R> {
    fn load_private_key(&self) -> Result<PrivateKey, KeyError> {
        (**self).load_private_key()
    }

    fn load_public_key(&self) -> Result<PublicKey, KeyError> {
        (**self).load_public_key()
    }
}
