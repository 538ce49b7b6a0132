//! # Token Core
//!
//! RS256 access token core for the task management backend.
//! This crate contains the key provider (RSA generation, PEM persistence and
//! loading), the key repository seam, and the token service that issues and
//! verifies signed tokens over caller-supplied claims.

pub mod config;
pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

#[cfg(test)]
mod test_support;

// Re-export commonly used types for convenience
pub use config::AuthConfig;
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
