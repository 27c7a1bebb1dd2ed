//! Cart item repository for database operations.

use sqlx::SqlitePool;

use cortado_core::{ProductId, UserId};

use super::RepositoryError;
use crate::models::CartItem;

/// Repository for cart database operations.
pub struct CartItemRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CartItemRepository<'a> {
    /// Create a new cart item repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new cart row.
    ///
    /// One row per call: repeated adds of the same product are not merged,
    /// and neither the product id nor the quantity is validated.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn insert(
        &self,
        user_id: UserId,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO cart_items (user_id, product_id, quantity)
            VALUES (?, ?, ?)
            ",
        )
        .bind(user_id)
        .bind(product_id)
        .bind(quantity)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// List a user's cart rows, enriched with product names.
    ///
    /// Returns an empty vec for users with no cart rows (or unknown
    /// users); that is not an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<CartItem>, RepositoryError> {
        let items = sqlx::query_as::<_, CartItem>(
            r"
            SELECT
                ci.id,
                ci.user_id,
                ci.product_id,
                ci.quantity,
                COALESCE(p.name, '') AS product_name
            FROM cart_items ci
            LEFT JOIN products p ON ci.product_id = p.id
            WHERE ci.user_id = ?
            ORDER BY ci.id
            ",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use cortado_core::Price;

    use super::*;
    use crate::db::products::ProductRepository;
    use crate::db::test_util::test_pool;
    use crate::db::users::UserRepository;

    #[tokio::test]
    async fn test_repeated_adds_are_separate_rows() {
        let pool = test_pool().await;
        let users = UserRepository::new(&pool);
        let products = ProductRepository::new(&pool);
        let cart = CartItemRepository::new(&pool);

        let user = users.create("zagreus", "hash").await.expect("create user");
        let americano = products
            .insert("Americano", Price::from_cents(100), "Diluted espresso")
            .await
            .expect("insert product");

        cart.insert(user.id, americano.id, 2).await.expect("add");
        cart.insert(user.id, americano.id, 1).await.expect("add");

        let items = cart.list_for_user(user.id).await.expect("list");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[1].quantity, 1);
        assert!(items.iter().all(|i| i.product_name == "Americano"));
    }

    #[tokio::test]
    async fn test_unknown_product_gets_empty_name() {
        let pool = test_pool().await;
        let users = UserRepository::new(&pool);
        let cart = CartItemRepository::new(&pool);

        let user = users.create("melinoe", "hash").await.expect("create user");
        cart.insert(user.id, ProductId::new(999), 1).await.expect("add");

        let items = cart.list_for_user(user.id).await.expect("list");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].product_name, "");
    }

    #[tokio::test]
    async fn test_empty_cart_is_empty_vec() {
        let pool = test_pool().await;
        let cart = CartItemRepository::new(&pool);

        let items = cart.list_for_user(UserId::new(42)).await.expect("list");
        assert!(items.is_empty());
    }
}
