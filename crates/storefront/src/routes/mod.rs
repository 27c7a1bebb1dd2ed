//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                  - Catalog listing (plus username when logged in)
//! GET  /health            - Liveness check
//! GET  /health/ready      - Readiness check (database ping)
//!
//! # Products
//! GET  /products/{id}     - Product detail
//!
//! # Auth
//! GET  /auth/login        - Login page
//! POST /auth/login        - Login action (sets the session cookie)
//!
//! # Cart (requires auth)
//! GET  /cart              - Cart page
//! POST /cart/add          - Add to cart
//! POST /cart/checkout     - Convert the cart into a transaction
//!
//! # History (requires auth)
//! GET  /transactions      - Order history with computed totals
//! ```

pub mod auth;
pub mod cart;
pub mod home;
pub mod products;
pub mod transactions;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", get(auth::login_page).post(auth::login))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new().route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/checkout", post(cart::checkout))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Product routes
        .nest("/products", product_routes())
        // Cart routes
        .nest("/cart", cart_routes())
        // Order history
        .route("/transactions", get(transactions::index))
        // Auth routes
        .nest("/auth", auth_routes())
}
