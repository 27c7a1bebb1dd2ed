//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `auth` - Credential check, session issuance, token resolution
//! - `catalog` - Read-only product listing and lookup
//! - `cart` - Add-to-cart and cart listing
//! - `checkout` - Cart-to-transaction conversion
//! - `history` - Past transactions with computed totals
//!
//! Services borrow the pool through per-table repositories in [`crate::db`]
//! and return domain models; routes only translate their results into
//! responses.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod history;

pub use auth::AuthService;
pub use cart::CartService;
pub use catalog::CatalogService;
pub use checkout::CheckoutService;
pub use history::HistoryService;
