//! Database operations for the storefront `SQLite` database.
//!
//! ## Tables
//!
//! - `users` - Seeded site accounts (Argon2 password hashes)
//! - `products` - Seeded catalog, read-only at runtime
//! - `sessions` - Login tokens, one row per login, never expire
//! - `cart_items` - Pending purchases, consumed by checkout
//! - `transactions` / `line_items` - Committed checkout records
//!
//! # Migrations
//!
//! Migrations are stored in `crates/storefront/migrations/`, embedded via
//! [`MIGRATOR`], and run at startup before seeding.

pub mod cart_items;
pub mod products;
pub mod seed;
pub mod sessions;
pub mod transactions;
pub mod users;

use std::str::FromStr;
use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use thiserror::Error;

/// Embedded migrations from `crates/storefront/migrations/`.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

/// Errors from repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., duplicate session token).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `SQLite` connection pool.
///
/// The pool is capped at a single connection: `SQLite` allows one writer at
/// a time, and a single connection serializes the multi-statement checkout
/// sequence against concurrent checkouts for the same user.
///
/// # Errors
///
/// Returns `sqlx::Error` if the URL is invalid or the connection cannot be
/// established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<SqlitePool, sqlx::Error> {
    // sqlx enables the foreign_keys pragma by default; the schema relies on
    // REFERENCES clauses being documentation only (see migrations/0001_init.sql).
    let options = SqliteConnectOptions::from_str(database_url.expose_secret())?
        .create_if_missing(true)
        .foreign_keys(false);

    SqlitePoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
}

#[cfg(test)]
pub(crate) mod test_util {
    use secrecy::SecretString;
    use sqlx::SqlitePool;

    /// Fresh in-memory database with the schema applied.
    pub(crate) async fn test_pool() -> SqlitePool {
        let pool = super::create_pool(&SecretString::from("sqlite::memory:"))
            .await
            .expect("connect to in-memory database");
        super::MIGRATOR.run(&pool).await.expect("run migrations");
        pool
    }
}
