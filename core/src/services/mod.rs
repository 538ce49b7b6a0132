//! Business services containing domain logic and use cases.

pub mod keys;
pub mod token;

// Re-export commonly used types
pub use keys::{
    generate_default_key_pair, generate_key_pair, load_private_key, load_public_key,
    persist_key_pair, KeyPathConfig,
};
pub use token::{Clock, FixedClock, SystemClock, TokenService, TokenServiceConfig};
