//! Token service module for JWT management
//!
//! This module handles all token-related operations including:
//! - RS256 access token issuance over caller-supplied claims
//! - Signature, algorithm and validity-window verification
//! - A clock abstraction so validity checks are deterministic in tests

mod clock;
mod config;
mod service;


pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{TokenServiceConfig, DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES};
pub use service::TokenService;
