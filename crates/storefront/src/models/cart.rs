//! Cart domain types.

use cortado_core::{CartItemId, ProductId, UserId};

/// A pending, uncommitted request to purchase a quantity of one product.
///
/// One row per add-to-cart action; repeated adds of the same product are
/// separate rows. Consumed (deleted) by checkout.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct CartItem {
    /// Unique cart row ID.
    pub id: CartItemId,
    /// Owning user.
    pub user_id: UserId,
    /// Product being requested.
    pub product_id: ProductId,
    /// Requested quantity.
    pub quantity: i64,
    /// Product name resolved via join; empty when the product no longer
    /// exists (product existence is not validated on insert).
    pub product_name: String,
}
