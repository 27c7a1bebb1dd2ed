//! Product domain types.

use cortado_core::{Price, ProductId};

/// A catalog product.
///
/// Immutable after seeding; read-only at runtime.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price in cents.
    pub price: Price,
    /// Short description for the detail page.
    pub description: String,
}
