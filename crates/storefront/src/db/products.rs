//! Product repository for database operations.

use sqlx::SqlitePool;

use cortado_core::{Price, ProductId};

use super::RepositoryError;
use crate::models::Product;

/// Repository for catalog database operations.
pub struct ProductRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all products in row order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(
            r"
            SELECT id, name, price, description
            FROM products
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// Get a product by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(
            r"
            SELECT id, name, price, description
            FROM products
            WHERE id = ?
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(product)
    }

    /// Count all products. Used to decide whether to seed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }

    /// Insert a product. Only used by seeding; the catalog is read-only at
    /// runtime.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn insert(
        &self,
        name: &str,
        price: Price,
        description: &str,
    ) -> Result<Product, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(
            r"
            INSERT INTO products (name, price, description)
            VALUES (?, ?, ?)
            RETURNING id, name, price, description
            ",
        )
        .bind(name)
        .bind(price)
        .bind(description)
        .fetch_one(self.pool)
        .await?;

        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_util::test_pool;

    #[tokio::test]
    async fn test_list_returns_inserted_products_in_row_order() {
        let pool = test_pool().await;
        let repo = ProductRepository::new(&pool);

        let americano = repo
            .insert("Americano", Price::from_cents(100), "Diluted espresso")
            .await
            .expect("insert");
        let espresso = repo
            .insert("Espresso", Price::from_cents(90), "A strong shot")
            .await
            .expect("insert");

        let products = repo.list().await.expect("list");
        assert_eq!(products, vec![americano, espresso]);
    }

    #[tokio::test]
    async fn test_get_by_id_miss_is_none() {
        let pool = test_pool().await;
        let repo = ProductRepository::new(&pool);

        let missing = repo.get_by_id(ProductId::new(999)).await.expect("query");
        assert!(missing.is_none());
    }
}
