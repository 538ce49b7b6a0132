//! Domain entities representing claim sets and key material.

pub mod claims;
pub mod key_pair;


// Re-export commonly used types
pub use claims::{
    ClaimSet, CLAIM_EXPIRES_AT, CLAIM_ISSUED_AT, CLAIM_NOT_BEFORE, CLAIM_SUBJECT,
    RESERVED_CLAIMS,
};
pub use key_pair::{KeyPair, PrivateKey, PublicKey, MIN_KEY_BITS};
