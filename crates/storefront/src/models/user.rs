//! User domain types.

use cortado_core::UserId;

/// A storefront user (domain type).
///
/// The password hash never leaves the `db` layer; this is the identity
/// value that flows through sessions, carts, and checkout.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Login name, unique across users.
    pub username: String,
}
