//! Catalog service: read-only product listing and lookup.

use sqlx::SqlitePool;

use cortado_core::ProductId;

use crate::db::RepositoryError;
use crate::db::products::ProductRepository;
use crate::models::Product;

/// Read-only catalog access. No pagination, no filtering.
pub struct CatalogService<'a> {
    products: ProductRepository<'a>,
}

impl<'a> CatalogService<'a> {
    /// Create a new catalog service.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self {
            products: ProductRepository::new(pool),
        }
    }

    /// List all products in stable row order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_products(&self) -> Result<Vec<Product>, RepositoryError> {
        self.products.list().await
    }

    /// Look up a single product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no product has that id.
    pub async fn get_product(&self, id: ProductId) -> Result<Product, RepositoryError> {
        self.products
            .get_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::seed;
    use crate::db::test_util::test_pool;

    #[tokio::test]
    async fn test_every_listed_product_is_retrievable() {
        let pool = test_pool().await;
        seed::run(&pool).await.expect("seed");
        let catalog = CatalogService::new(&pool);

        let products = catalog.list_products().await.expect("list");
        assert_eq!(products.len(), 4);

        for product in products {
            let found = catalog.get_product(product.id).await.expect("get");
            assert_eq!(found, product);
        }
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let pool = test_pool().await;
        let catalog = CatalogService::new(&pool);

        let err = catalog
            .get_product(ProductId::new(999))
            .await
            .expect_err("missing product");
        assert!(matches!(err, RepositoryError::NotFound));
    }
}
