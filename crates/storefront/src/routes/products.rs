//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};

use cortado_core::ProductId;

use crate::db::RepositoryError;
use crate::error::{AppError, Result};
use crate::filters;
use crate::models::Product;
use crate::services::CatalogService;
use crate::state::AppState;

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: Product,
}

/// Display the product detail page.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ProductShowTemplate> {
    let product = CatalogService::new(state.pool())
        .get_product(ProductId::new(id))
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => AppError::NotFound(format!("product {id}")),
            other => AppError::from(other),
        })?;

    Ok(ProductShowTemplate { product })
}
