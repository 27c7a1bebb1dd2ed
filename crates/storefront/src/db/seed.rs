//! Startup seeding for users and products.
//!
//! Both tables are seeded only when empty, so restarting against an
//! existing database is a no-op. Seed passwords are hashed before they
//! are stored; the plaintext never reaches the database.

use sqlx::SqlitePool;
use thiserror::Error;
use tracing::info;

use cortado_core::Price;

use super::RepositoryError;
use super::products::ProductRepository;
use super::users::UserRepository;
use crate::services::auth::hash_password;

/// Seed accounts: `(username, password)`.
const SEED_USERS: &[(&str, &str)] = &[("zagreus", "cerberus"), ("melinoe", "b4d3ec1")];

/// Seed catalog: `(name, price in cents, description)`.
const SEED_PRODUCTS: &[(&str, i64, &str)] = &[
    ("Americano", 100, "Espresso, diluted for a lighter experience"),
    ("Cappuccino", 110, "Espresso with steamed milk"),
    ("Espresso", 90, "A strong shot of coffee"),
    ("Macchiato", 120, "Espresso with a small amount of milk"),
];

/// Errors from startup seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Database operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// A seed password could not be hashed.
    #[error("failed to hash seed password for {0}")]
    PasswordHash(String),
}

/// Seed users and products into an empty database.
///
/// # Errors
///
/// Returns `SeedError` if hashing or any database operation fails.
pub async fn run(pool: &SqlitePool) -> Result<(), SeedError> {
    let users = UserRepository::new(pool);
    if users.count().await? == 0 {
        for (username, password) in SEED_USERS {
            let hash = hash_password(password)
                .map_err(|_| SeedError::PasswordHash((*username).to_owned()))?;
            users.create(username, &hash).await?;
        }
        info!(count = SEED_USERS.len(), "Seeded users");
    }

    let products = ProductRepository::new(pool);
    if products.count().await? == 0 {
        for (name, cents, description) in SEED_PRODUCTS {
            products
                .insert(name, Price::from_cents(*cents), description)
                .await?;
        }
        info!(count = SEED_PRODUCTS.len(), "Seeded products");
    }

    Ok(())
}
