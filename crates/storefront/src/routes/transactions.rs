//! Order history route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::error::Result;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::models::{TransactionWithItems, User};
use crate::services::HistoryService;
use crate::state::AppState;

/// Order history template, most recent order first.
#[derive(Template, WebTemplate)]
#[template(path = "transactions/index.html")]
pub struct TransactionsTemplate {
    pub user: User,
    pub history: Vec<TransactionWithItems>,
}

/// Display the current user's past orders with their totals.
pub async fn index(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<TransactionsTemplate> {
    let history = HistoryService::new(state.pool())
        .list_transactions(&user)
        .await?;

    Ok(TransactionsTemplate { user, history })
}
