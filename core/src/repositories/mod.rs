//! Repository interfaces and key storage implementations.

pub mod key;

pub use key::{FileKeyRepository, InMemoryKeyRepository, KeyRepository};
