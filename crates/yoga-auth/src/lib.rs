//! # Yoga Auth
//!
//! JWT claims and token utilities for the Yoga Studio API.
//!
//! Tokens are HS256-signed with the secret from [`JwtConfig`] and carry the
//! caller's email as subject together with the user id and admin flag, so
//! request handlers can identify the caller without a database round trip.
//!
//! # Example
//!
//! ```ignore
//! use yoga_auth::{create_access_token, verify_token};
//! use yoga_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(1, "yoga@studio.com", true, &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.sub, "yoga@studio.com");
//! ```
//!
//! [`JwtConfig`]: yoga_config::JwtConfig

pub mod claims;
pub mod jwt;

pub use claims::Claims;
pub use jwt::{create_access_token, verify_token};
