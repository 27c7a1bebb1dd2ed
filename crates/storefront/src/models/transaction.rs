//! Transaction and line item domain types.

use chrono::{DateTime, Utc};

use cortado_core::{LineItemId, Price, ProductId, TransactionId, UserId};

/// An immutable committed record of a checkout event.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Transaction {
    /// Unique transaction ID.
    pub id: TransactionId,
    /// User who checked out.
    pub user_id: UserId,
    /// Checkout time (UTC).
    pub created_at: DateTime<Utc>,
}

/// An immutable record of one product/quantity pair within a transaction.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct LineItem {
    /// Unique line item ID.
    pub id: LineItemId,
    /// Parent transaction.
    pub transaction_id: TransactionId,
    /// Product purchased.
    pub product_id: ProductId,
    /// Purchased quantity.
    pub quantity: i64,
    /// Unit price snapshotted at checkout time. Later catalog price
    /// changes do not affect this value.
    pub unit_price: Price,
    /// Product name resolved via join; empty when the product no longer
    /// exists.
    pub product_name: String,
}

impl LineItem {
    /// The line total (`unit_price * quantity`).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price * self.quantity
    }
}

/// A transaction with its line items and read-time computed total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionWithItems {
    /// The committed transaction.
    pub transaction: Transaction,
    /// Its line items, enriched with product names.
    pub items: Vec<LineItem>,
    /// Sum of line totals over the snapshot prices.
    pub total: Price,
}

impl TransactionWithItems {
    /// Assemble a history entry, computing the total from the items.
    #[must_use]
    pub fn new(transaction: Transaction, items: Vec<LineItem>) -> Self {
        let total = items.iter().map(LineItem::line_total).sum();
        Self {
            transaction,
            items,
            total,
        }
    }
}
