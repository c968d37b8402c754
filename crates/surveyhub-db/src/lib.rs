//! # Surveyhub DB
//!
//! Document store access for the Surveyhub API.
//!
//! User and survey records are schemaless JSON documents. Each entity table
//! carries a store-assigned `id UUID` primary key and a single JSONB `doc`
//! column holding whatever the caller submitted, verbatim. This crate
//! provides the connection pool, the embedded migrations, and the shared
//! wire types for documents and write results.
//!
//! # Example
//!
//! ```ignore
//! use surveyhub_db::{init_db_pool, run_migrations};
//!
//! #[tokio::main]
//! async fn main() {
//!     let pool = init_db_pool().await;
//!     run_migrations(&pool).await.expect("migrations failed");
//! }
//! ```

pub mod document;

use std::env;

// Re-export commonly used types at crate root
pub use document::{InsertResult, StoredDocument, UpdateResult};
pub use sqlx::PgPool;

/// Embedded migrations from `crates/surveyhub-db/migrations`.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

/// Initializes the PostgreSQL connection pool from `DATABASE_URL`.
///
/// Called once during startup; the returned pool is cheaply cloneable and
/// is passed to handlers through the application state.
///
/// # Panics
///
/// Panics if `DATABASE_URL` is not set or the connection fails.
pub async fn init_db_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database")
}

/// Applies any pending migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}
