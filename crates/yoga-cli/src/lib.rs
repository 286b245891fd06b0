//! # Yoga CLI
//!
//! Administrative tasks for the Yoga Studio API: creating admin accounts and
//! filling a development database with fake teachers and sessions.
//!
//! Everything here goes through the [`yoga_db::Store`] traits, so the same
//! code runs against PostgreSQL in the binary and against the in-memory
//! store in tests.
//!
//! ```ignore
//! use yoga_cli::seeder::{SeedConfig, seed_all};
//!
//! let store = PgStore::new(pool);
//! seed_all(&store, SeedConfig::default()).await?;
//! ```

pub mod admin;
pub mod seeder;
