//! Cart service: add-to-cart and cart listing.

use sqlx::SqlitePool;

use cortado_core::{ProductId, UserId};

use crate::db::RepositoryError;
use crate::db::cart_items::CartItemRepository;
use crate::models::CartItem;

/// Cart operations for a resolved user.
pub struct CartService<'a> {
    cart_items: CartItemRepository<'a>,
}

impl<'a> CartService<'a> {
    /// Create a new cart service.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self {
            cart_items: CartItemRepository::new(pool),
        }
    }

    /// Add one cart row.
    ///
    /// The contract is insert-only: the product id and quantity are not
    /// validated, and repeated adds of the same product are not merged.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn add_to_cart(
        &self,
        user_id: UserId,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<(), RepositoryError> {
        self.cart_items.insert(user_id, product_id, quantity).await
    }

    /// List the user's cart rows, enriched with product names.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_cart(&self, user_id: UserId) -> Result<Vec<CartItem>, RepositoryError> {
        self.cart_items.list_for_user(user_id).await
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
    async fn test_list_returns_exactly_the_added_rows() {
        let pool = test_pool().await;
        let cart = CartService::new(&pool);

        let user = UserRepository::new(&pool)
            .create("zagreus", "hash")
            .await
            .expect("create user");
        let products = ProductRepository::new(&pool);
        let americano = products
            .insert("Americano", Price::from_cents(100), "Diluted espresso")
            .await
            .expect("insert");
        let espresso = products
            .insert("Espresso", Price::from_cents(90), "A strong shot")
            .await
            .expect("insert");

        cart.add_to_cart(user.id, americano.id, 2).await.expect("add");
        cart.add_to_cart(user.id, espresso.id, 1).await.expect("add");
        cart.add_to_cart(user.id, americano.id, 3).await.expect("add");

        let items = cart.list_cart(user.id).await.expect("list");
        let summary: Vec<(ProductId, i64, &str)> = items
            .iter()
            .map(|i| (i.product_id, i.quantity, i.product_name.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (americano.id, 2, "Americano"),
                (espresso.id, 1, "Espresso"),
                (americano.id, 3, "Americano"),
            ]
        );
    }
}
