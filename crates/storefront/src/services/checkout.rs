//! Checkout service: atomically convert a cart into a transaction.

use chrono::Utc;
use sqlx::SqlitePool;

use crate::db::RepositoryError;
use crate::db::transactions::TransactionRepository;
use crate::models::{Transaction, User};

/// Converts a user's cart into a committed transaction with line items.
pub struct CheckoutService<'a> {
    transactions: TransactionRepository<'a>,
}

impl<'a> CheckoutService<'a> {
    /// Create a new checkout service.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self {
            transactions: TransactionRepository::new(pool),
        }
    }

    /// Commit the user's current cart as a transaction.
    ///
    /// The snapshot, line-item inserts, and cart clearing run inside a
    /// single database transaction (see
    /// [`TransactionRepository::checkout`]). An empty cart commits an
    /// empty transaction.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the checkout fails; the
    /// cart is left untouched in that case.
    pub async fn checkout(&self, user: &User) -> Result<Transaction, RepositoryError> {
        self.transactions.checkout(user.id, Utc::now()).await
    }
}
