//! # Yoga DB
//!
//! The repository layer of the Yoga Studio API.
//!
//! - [`repository`]: the [`UserRepository`], [`TeacherRepository`] and
//!   [`SessionRepository`] contracts, bundled as [`Store`]
//! - [`postgres`]: [`PgStore`], the PostgreSQL implementation
//! - `memory`: `InMemoryStore`, an implementation with the same semantics kept
//!   in process (compiled for tests and with the `test-utils` feature)
//!
//! Services only ever see `&dyn Store`, so the HTTP layer runs unchanged on
//! either backend.
//!
//! # Example
//!
//! ```ignore
//! use yoga_config::DatabaseConfig;
//! use yoga_db::{PgStore, init_db_pool};
//!
//! let config = DatabaseConfig::from_env().expect("DATABASE_URL must be set");
//! let pool = init_db_pool(&config).await?;
//! let store = PgStore::new(pool);
//! ```

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;
pub mod postgres;
pub mod repository;

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use yoga_config::DatabaseConfig;

#[cfg(any(test, feature = "test-utils"))]
pub use memory::{
    DEMO_ADMIN_EMAIL, DEMO_ADMIN_PASSWORD, DEMO_USER_EMAIL, DEMO_USER_PASSWORD, InMemoryStore,
};
pub use postgres::PgStore;
pub use repository::{SessionRepository, Store, TeacherRepository, UserRepository};
pub use sqlx::PgPool;

/// Opens the PostgreSQL connection pool described by `config`.
///
/// Called once at startup; the returned pool is cheap to clone.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&config.url)
        .await?;

    tracing::info!(max_connections = config.max_connections, "Database pool initialized");

    Ok(pool)
}

/// Applies the SQL migrations shipped in `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}
