//! Cart route handlers. All of them require a logged-in user.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::Redirect,
    Form,
};
use serde::Deserialize;

use cortado_core::ProductId;

use crate::error::Result;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::models::{CartItem, User};
use crate::services::{CartService, CheckoutService};
use crate::state::AppState;

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartTemplate {
    pub user: User,
    pub items: Vec<CartItem>,
}

/// Add-to-cart form body, posted from the product detail page.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: i64,
    pub quantity: i64,
}

/// Display the current user's cart.
pub async fn show(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<CartTemplate> {
    let items = CartService::new(state.pool()).list_cart(user.id).await?;

    Ok(CartTemplate { user, items })
}

/// Add a product to the cart, then send the shopper back to the catalog.
pub async fn add(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Form(form): Form<AddToCartForm>,
) -> Result<Redirect> {
    CartService::new(state.pool())
        .add_to_cart(user.id, ProductId::new(form.product_id), form.quantity)
        .await?;

    Ok(Redirect::to("/"))
}

/// Convert the cart into a transaction and show the order history.
pub async fn checkout(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Redirect> {
    let transaction = CheckoutService::new(state.pool()).checkout(&user).await?;
    tracing::info!(
        user_id = %user.id,
        transaction_id = %transaction.id,
        "Checkout completed"
    );

    Ok(Redirect::to("/transactions"))
}
