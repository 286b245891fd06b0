//! # Yoga Core
//!
//! Core types shared by every crate of the Yoga Studio API.
//!
//! - [`errors`]: the application error type and its HTTP response conversion
//! - [`password`]: bcrypt password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use yoga_core::errors::AppError;
//! use yoga_core::password::{hash_password, verify_password};
//!
//! let error = AppError::not_found(anyhow::anyhow!("Session not found"));
//!
//! let hash = hash_password("test!1234")?;
//! assert!(verify_password("test!1234", &hash)?);
//! ```

pub mod errors;
pub mod password;

pub use errors::AppError;
pub use password::{hash_password, verify_password};
