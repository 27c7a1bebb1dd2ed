//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::error::Result;
use crate::filters;
use crate::middleware::OptionalAuth;
use crate::models::Product;
use crate::services::CatalogService;
use crate::state::AppState;

/// Home page template: the catalog plus the current username.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Empty string for anonymous visitors.
    pub username: String,
    pub products: Vec<Product>,
}

/// Display the catalog listing.
pub async fn home(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
) -> Result<HomeTemplate> {
    let products = CatalogService::new(state.pool()).list_products().await?;

    Ok(HomeTemplate {
        username: user.map(|u| u.username).unwrap_or_default(),
        products,
    })
}
