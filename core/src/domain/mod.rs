//! Domain layer containing claim sets and key material.

pub mod entities;

// Re-export commonly used domain types
pub use entities::*;
