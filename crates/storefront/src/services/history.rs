//! History service: past transactions with line items and totals.

use sqlx::SqlitePool;

use cortado_core::TransactionId;

use crate::db::RepositoryError;
use crate::db::transactions::TransactionRepository;
use crate::models::{LineItem, TransactionWithItems, User};

/// Read access to a user's committed checkout history.
pub struct HistoryService<'a> {
    transactions: TransactionRepository<'a>,
}

impl<'a> HistoryService<'a> {
    /// Create a new history service.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self {
            transactions: TransactionRepository::new(pool),
        }
    }

    /// List the user's transactions, most recent first, each with its
    /// line items and total.
    ///
    /// Totals are computed at read time from the `unit_price` snapshots
    /// stored at checkout.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any query fails.
    pub async fn list_transactions(
        &self,
        user: &User,
    ) -> Result<Vec<TransactionWithItems>, RepositoryError> {
        let transactions = self.transactions.list_for_user(user.id).await?;

        let mut history = Vec::with_capacity(transactions.len());
        for transaction in transactions {
            let items = self.transactions.line_items(transaction.id).await?;
            history.push(TransactionWithItems::new(transaction, items));
        }

        Ok(history)
    }

    /// List the line items of one transaction.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn line_items(
        &self,
        transaction_id: TransactionId,
    ) -> Result<Vec<LineItem>, RepositoryError> {
        self.transactions.line_items(transaction_id).await
    }
}

#[cfg(test)]
mod tests {
    use cortado_core::Price;

    use super::*;
    use crate::db::seed;
    use crate::db::test_util::test_pool;
    use crate::services::auth::AuthService;
    use crate::services::cart::CartService;
    use crate::services::catalog::CatalogService;
    use crate::services::checkout::CheckoutService;

    /// The worked example: Americano(100)x2 + Espresso(90)x1 totals 290.
    #[tokio::test]
    async fn test_americano_espresso_scenario() {
        let pool = test_pool().await;
        seed::run(&pool).await.expect("seed");

        let auth = AuthService::new(&pool);
        let catalog = CatalogService::new(&pool);
        let cart = CartService::new(&pool);
        let checkout = CheckoutService::new(&pool);
        let history = HistoryService::new(&pool);

        let user = auth
            .authenticate("zagreus", "cerberus")
            .await
            .expect("login");

        let products = catalog.list_products().await.expect("list");
        let americano = products
            .iter()
            .find(|p| p.name == "Americano")
            .expect("seeded");
        let espresso = products
            .iter()
            .find(|p| p.name == "Espresso")
            .expect("seeded");

        cart.add_to_cart(user.id, americano.id, 2).await.expect("add");
        cart.add_to_cart(user.id, espresso.id, 1).await.expect("add");
        let transaction = checkout.checkout(&user).await.expect("checkout");

        let entries = history.list_transactions(&user).await.expect("history");
        assert_eq!(entries.len(), 1);

        let entry = &entries[0];
        assert_eq!(entry.transaction.id, transaction.id);
        assert_eq!(entry.items.len(), 2);
        assert_eq!(entry.total, Price::from_cents(290));

        let items = history.line_items(transaction.id).await.expect("items");
        assert_eq!(items, entry.items);
    }

    #[tokio::test]
    async fn test_history_is_most_recent_first() {
        let pool = test_pool().await;
        seed::run(&pool).await.expect("seed");

        let auth = AuthService::new(&pool);
        let checkout = CheckoutService::new(&pool);
        let history = HistoryService::new(&pool);

        let user = auth
            .authenticate("melinoe", "b4d3ec1")
            .await
            .expect("login");

        let first = checkout.checkout(&user).await.expect("checkout");
        let second = checkout.checkout(&user).await.expect("checkout");

        let entries = history.list_transactions(&user).await.expect("history");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].transaction.id, second.id);
        assert_eq!(entries[1].transaction.id, first.id);
    }
}
