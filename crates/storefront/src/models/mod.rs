//! Domain models for the storefront.
//!
//! These are the values the services hand to routes and templates. Row
//! decoding happens in the `db` repositories; anything join-enriched
//! (cart lines with product names, line items with snapshot prices)
//! carries the enrichment here rather than in the renderer.

pub mod cart;
pub mod product;
pub mod transaction;
pub mod user;

pub use cart::CartItem;
pub use product::Product;
pub use transaction::{LineItem, Transaction, TransactionWithItems};
pub use user::User;
