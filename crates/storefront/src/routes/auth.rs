//! Login route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;

use crate::error::Result;
use crate::filters;
use crate::middleware::session_cookie;
use crate::services::auth::{AuthError, AuthService};
use crate::state::AppState;

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
}

/// Query parameters carried back to the login page after a failure.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
}

/// Login form body.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Display the login page.
pub async fn login_page(Query(query): Query<MessageQuery>) -> LoginTemplate {
    let error = query
        .error
        .map(|_| "Invalid username or password.".to_owned());

    LoginTemplate { error }
}

/// Handle a login submission.
///
/// On success a fresh session token is minted, stored, and set as a
/// cookie before redirecting home. Bad credentials bounce back to the
/// login page with a generic message; the reason is never disclosed.
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    let auth = AuthService::new(state.pool());

    let user = match auth.authenticate(&form.username, &form.password).await {
        Ok(user) => user,
        Err(AuthError::InvalidCredentials) => {
            tracing::warn!(username = %form.username, "Failed login attempt");
            return Ok(Redirect::to("/auth/login?error=credentials").into_response());
        }
        Err(e) => return Err(e.into()),
    };

    let token = auth.create_session(&user).await?;
    tracing::info!(user_id = %user.id, "User logged in");

    let cookie = session_cookie(&token, state.config().cookie_secure());
    Ok((AppendHeaders([(SET_COOKIE, cookie)]), Redirect::to("/")).into_response())
}
