//! Transaction and line item repository, including the checkout sequence.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use cortado_core::{TransactionId, UserId};

use super::RepositoryError;
use crate::models::{LineItem, Transaction};

/// Repository for committed checkout records.
pub struct TransactionRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TransactionRepository<'a> {
    /// Create a new transaction repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Convert a user's cart into a committed transaction.
    ///
    /// Runs as a single database transaction:
    ///
    /// 1. insert the `transactions` row,
    /// 2. copy the user's cart rows into `line_items`, snapshotting the
    ///    current product price as `unit_price` (0 for products that no
    ///    longer exist),
    /// 3. delete the cart rows.
    ///
    /// A fault at any point rolls back to the pre-checkout state, so line
    /// items cannot exist without a parent transaction and cart rows
    /// cannot be both copied and kept. An empty cart still commits a
    /// transaction with zero line items.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any statement fails; the
    /// transaction is rolled back.
    pub async fn checkout(
        &self,
        user_id: UserId,
        now: DateTime<Utc>,
    ) -> Result<Transaction, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let transaction = sqlx::query_as::<_, Transaction>(
            r"
            INSERT INTO transactions (user_id, created_at)
            VALUES (?, ?)
            RETURNING id, user_id, created_at
            ",
        )
        .bind(user_id)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r"
            INSERT INTO line_items (transaction_id, product_id, quantity, unit_price)
            SELECT ?, ci.product_id, ci.quantity, COALESCE(p.price, 0)
            FROM cart_items ci
            LEFT JOIN products p ON ci.product_id = p.id
            WHERE ci.user_id = ?
            ",
        )
        .bind(transaction.id)
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM cart_items WHERE user_id = ?")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(transaction)
    }

    /// List a user's transactions, most recent first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Transaction>, RepositoryError> {
        let transactions = sqlx::query_as::<_, Transaction>(
            r"
            SELECT id, user_id, created_at
            FROM transactions
            WHERE user_id = ?
            ORDER BY id DESC
            ",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(transactions)
    }

    /// List a transaction's line items, enriched with product names.
    ///
    /// Prices come from the `unit_price` snapshot, not the current
    /// catalog.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn line_items(
        &self,
        transaction_id: TransactionId,
    ) -> Result<Vec<LineItem>, RepositoryError> {
        let items = sqlx::query_as::<_, LineItem>(
            r"
            SELECT
                li.id,
                li.transaction_id,
                li.product_id,
                li.quantity,
                li.unit_price,
                COALESCE(p.name, '') AS product_name
            FROM line_items li
            LEFT JOIN products p ON li.product_id = p.id
            WHERE li.transaction_id = ?
            ORDER BY li.id
            ",
        )
        .bind(transaction_id)
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }
}
