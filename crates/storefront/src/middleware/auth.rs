//! Authentication extractors.
//!
//! The session token travels in the `cortado_session` cookie. These
//! extractors pull it out of the request headers and resolve it through
//! the auth service; routes see either a required or an optional [`User`].

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, StatusCode, header::COOKIE, request::Parts},
    response::{IntoResponse, Redirect, Response},
};

use crate::models::User;
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "cortado_session";

/// Extract the session token from the request's cookie headers.
#[must_use]
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|header| header.split(';'))
        .find_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            (name == SESSION_COOKIE_NAME).then(|| value.to_owned())
        })
}

/// Build the `Set-Cookie` value for a freshly issued session token.
///
/// The session row never expires, so the cookie carries no `Max-Age` and
/// lives for the browser session.
#[must_use]
pub fn session_cookie(token: &str, secure: bool) -> String {
    let mut cookie = format!("{SESSION_COOKIE_NAME}={token}; Path=/; HttpOnly; SameSite=Lax");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Extractor that requires a logged-in user.
///
/// Anonymous requests are redirected to the login page.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAuth(user): RequireAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", user.username)
/// }
/// ```
pub struct RequireAuth(pub User);

/// Error returned when authentication is required but absent.
pub enum AuthRejection {
    /// No or unknown session token: redirect to the login page.
    RedirectToLogin,
    /// Session lookup failed at the storage layer.
    Internal,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/auth/login").into_response(),
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = session_token(&parts.headers) else {
            return Err(AuthRejection::RedirectToLogin);
        };

        let user = AuthService::new(state.pool())
            .resolve_session(&token)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to resolve session");
                AuthRejection::Internal
            })?;

        user.map(Self).ok_or(AuthRejection::RedirectToLogin)
    }
}

/// Extractor that optionally gets the current user.
///
/// Unlike `RequireAuth`, this does not reject anonymous requests; public
/// pages use it to show the username when someone is logged in.
pub struct OptionalAuth(pub Option<User>);

impl FromRequestParts<AppState> for OptionalAuth {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = match session_token(&parts.headers) {
            Some(token) => AuthService::new(state.pool())
                .resolve_session(&token)
                .await
                .unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "Failed to resolve session");
                    None
                }),
            None => None,
        };

        Ok(Self(user))
    }
}
